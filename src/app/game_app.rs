// src/app/game_app.rs

use std::sync::{Arc, Mutex};

use js_sys::Error;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::components::card::Suit;
use crate::components::stack::CardSelection;
use crate::config::rules::GameConfig;
use crate::logic::board::Board;

use super::{action_handler, state_getter};

/// 描画側 (JavaScript) から盤面を動かすための窓口だよ！
///
/// 盤面は `Arc<Mutex<Board>>` で持つ。操作1回ごとにロックを取るので、
/// 描画ループが読んでいる最中に盤面が変わることは無いよ。
#[wasm_bindgen]
pub struct SolitaireApp {
    board: Arc<Mutex<Board>>,
    config: GameConfig,
}

fn to_js_error(message: String) -> JsValue {
    JsValue::from(Error::new(&message))
}

impl SolitaireApp {
    pub fn from_board(board: Board) -> Self {
        let config = board.config().clone();
        Self {
            board: Arc::new(Mutex::new(board)),
            config,
        }
    }

    /// 盤面への共有ハンドル。
    pub fn board_handle(&self) -> Arc<Mutex<Board>> {
        Arc::clone(&self.board)
    }

    /// ロックを取って盤面を操作する。ロックに失敗したら `fallback` を返す。
    fn with_board<T>(&self, fallback: T, f: impl FnOnce(&mut Board) -> T) -> T {
        match self.board.lock() {
            Ok(mut board) => f(&mut board),
            Err(e) => {
                error!("SolitaireApp: Failed to lock board: {}", e);
                fallback
            }
        }
    }

    fn suit_from_index(suit: usize) -> Option<Suit> {
        let found = Suit::from_index(suit);
        if found.is_none() {
            warn!("SolitaireApp: Invalid suit index {}", suit);
        }
        found
    }
}

impl Default for SolitaireApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SolitaireApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("SolitaireApp: Initializing...");
        Self::from_board(Board::new())
    }

    /// JSON の設定 (例: `{"empty_column_rule":"KingOnly","seed":42}`) からゲームを作る。
    pub fn with_config_json(config_json: &str) -> Result<SolitaireApp, JsValue> {
        let config: GameConfig = serde_json::from_str(config_json).map_err(|e| {
            let error_msg = format!("Failed to deserialize config: {}. JSON: {}", e, config_json);
            error!("{}", error_msg);
            to_js_error(error_msg)
        })?;
        Ok(Self::from_board(Board::with_config(config)))
    }

    /// 新しいゲーム。盤面は作り直して差し替えるよ (シードがあれば同じ配りになる)。
    pub fn new_game(&self) {
        let fresh = Board::with_config(self.config.clone());
        self.with_board((), |board| *board = fresh);
        info!("SolitaireApp: New game dealt");
    }

    // --- 問い合わせ ---

    /// 盤面の状態を JSON 文字列で返すよ。描画に使ってね。
    pub fn get_board_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_board_state_json(&self.board).map_err(to_js_error)
    }

    /// `{"Waste":{"slot":2}}` のような選択に対して、置ける場所の一覧を JSON で返す。
    pub fn get_legal_targets_json(&self, selection_json: &str) -> Result<String, JsValue> {
        state_getter::get_legal_targets_json(&self.board, selection_json).map_err(to_js_error)
    }

    pub fn is_stock_empty(&self) -> bool {
        self.with_board(true, |board| board.is_stock_empty())
    }

    pub fn is_won(&self) -> bool {
        self.with_board(false, |board| board.is_won())
    }

    /// 場札 `column` の `offset` 番目から上をつかめるか (ハイライト用)。
    pub fn can_pick_from_column(&self, column: usize, offset: usize) -> bool {
        self.with_board(false, |board| board.is_selectable(CardSelection::Tableau { column, offset }))
    }

    // --- 操作 ---

    pub fn draw_from_stock(&self) -> bool {
        self.with_board(false, |board| board.draw_from_stock())
    }

    pub fn move_waste_to_foundation(&self, slot: usize, suit: usize) -> bool {
        match Self::suit_from_index(suit) {
            Some(suit) => self.with_board(false, |board| board.move_waste_to_foundation(slot, suit)),
            None => false,
        }
    }

    pub fn move_column_to_foundation(&self, column: usize, suit: usize) -> bool {
        match Self::suit_from_index(suit) {
            Some(suit) => self.with_board(false, |board| board.move_column_to_foundation(column, suit)),
            None => false,
        }
    }

    pub fn move_waste_to_column(&self, slot: usize, column: usize) -> bool {
        self.with_board(false, |board| board.move_waste_to_column(slot, column))
    }

    pub fn move_column_run_to_column(&self, source: usize, offset: usize, destination: usize) -> bool {
        self.with_board(false, |board| board.move_column_run_to_column(source, offset, destination))
    }

    /// カードがダブルクリックされた時の処理。組札へ置けるなら自動で置く。
    pub fn handle_double_click_waste(&self, slot: usize) -> bool {
        self.with_board(false, |board| board.auto_move_to_foundation(CardSelection::Waste { slot }))
    }

    pub fn handle_double_click_column(&self, column: usize, offset: usize) -> bool {
        self.with_board(false, |board| {
            board.auto_move_to_foundation(CardSelection::Tableau { column, offset })
        })
    }

    /// JSON で届いた操作 (`PlayerAction`) を適用する。
    pub fn apply_action_json(&self, action_json: &str) -> Result<bool, JsValue> {
        action_handler::apply_action_json(&self.board, action_json).map_err(to_js_error)
    }
}
