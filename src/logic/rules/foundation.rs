//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};
use super::common::get_foundation_suit;

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// 空の組札には Ace だけ。カードがあるなら同じスートで、ランクがちょうど1つ上のカードだけ置ける。
pub fn can_move_to_foundation(
    card_to_move: &Card,
    foundation_top: Option<&Card>,
    target_foundation_index: u8,
) -> bool {
    let target_suit = match get_foundation_suit(target_foundation_index) {
        Some(suit) => suit,
        None => {
            trace!("[Foundation Rule] Invalid Foundation index: {}", target_foundation_index);
            return false;
        }
    };

    if card_to_move.suit() != target_suit {
        trace!("[Foundation Rule] {} does not belong on Foundation({})", card_to_move, target_foundation_index);
        return false;
    }

    let result = match foundation_top {
        None => card_to_move.rank() == Rank::Ace,
        Some(top) => top.suit() == target_suit && top.rank().next() == Some(card_to_move.rank()),
    };
    trace!("[Foundation Rule] {} onto Foundation({}): {}", card_to_move, target_foundation_index, result);
    result
}
