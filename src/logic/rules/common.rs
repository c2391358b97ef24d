//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::Suit;

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Club ♣️, 1: Diamond ♦️, 2: Heart ❤️, 3: Spade ♠️
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    Suit::from_index(foundation_index as usize)
}

/// スートから、そのスートが積まれる組札のインデックスを返す。
pub fn foundation_index_for(suit: Suit) -> u8 {
    suit.index() as u8
}
