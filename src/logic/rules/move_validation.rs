// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。盤面を変える前の唯一の判定窓口だよ。

use log::trace;

use crate::components::card::Card;
use crate::components::stack::{CardSelection, StackType};
use crate::logic::board::Board;
use super::{foundation, stock_waste, tableau};

/// 選択したカードを返す。場札の列なら一番下 (移動先に接するカード)。
/// つかめない選択 (一番上じゃない捨て札、裏向きの位置、列になっていない) なら `None`。
pub fn selected_card(board: &Board, from: CardSelection) -> Option<Card> {
    match from {
        CardSelection::Waste { slot } => {
            if stock_waste::can_play_from_waste(board.waste(), slot) {
                board.waste_card(slot)
            } else {
                None
            }
        }
        CardSelection::Tableau { column, offset } => {
            let source = board.column(column)?;
            if source.is_run_from(offset) {
                source.card_at(offset)
            } else {
                None
            }
        }
    }
}

/// 選択が1枚だけか。組札へは1枚ずつしか置けない。
fn is_single_card(board: &Board, from: CardSelection) -> bool {
    match from {
        CardSelection::Waste { .. } => true,
        CardSelection::Tableau { column, offset } => {
            board.column(column).map_or(false, |source| offset + 1 == source.len())
        }
    }
}

/// 指定されたカードを特定のスタックに移動できるか検証する。
pub fn is_move_valid(board: &Board, from: CardSelection, to: StackType) -> bool {
    let moving = match selected_card(board, from) {
        Some(card) => card,
        None => {
            trace!("[Rules Validation] {:?} is not a movable selection", from);
            return false;
        }
    };

    match to {
        StackType::Foundation(target_index) => {
            if !is_single_card(board, from) {
                trace!("[Rules Validation] Only single cards go to the foundation");
                return false;
            }
            let top = board.foundation_card(target_index as usize);
            foundation::can_move_to_foundation(&moving, top.as_ref(), target_index)
        }
        StackType::Tableau(target_index) => {
            if let CardSelection::Tableau { column, .. } = from {
                if column == target_index as usize {
                    return false;
                }
            }
            match board.column(target_index as usize) {
                Some(target) => tableau::can_move_to_tableau(
                    &moving,
                    target.top_card().as_ref(),
                    board.config().empty_column_rule,
                ),
                None => false,
            }
        }
        StackType::Stock | StackType::Waste => {
            // Stock, Waste への直接移動は許可されない
            trace!("[Rules Validation] Moving to {:?} is not allowed.", to);
            false
        }
    }
}
