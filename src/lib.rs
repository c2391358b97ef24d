// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // JS 向けの窓口 (SolitaireApp)
pub mod components; // カード、場札の列、置き場所の種類
pub mod config; // ルールの定数と設定
pub mod logger;
pub mod logic; // 盤面、デッキ、ルール判定
pub mod protocol; // 描画側とやり取りするデータ形式

pub use app::game_app::SolitaireApp;
pub use components::{Card, CardColor, CardSelection, Column, GameStatus, Rank, StackType, Suit};
pub use config::rules::{EmptyColumnRule, GameConfig};
pub use logic::Board;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if logger::init(log::LevelFilter::Info).is_ok() {
        log::info!("Panic hook and logger set!");
    }
}
