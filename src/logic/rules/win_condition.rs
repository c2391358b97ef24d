//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::Card;
use crate::config::rules::DECK_SIZE;

/// ゲームのクリア条件（全てのカードが組札にあるか）を判定する。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == DECK_SIZE
}

/// 組札の一番上のカードから、組札に積まれている枚数を数える。
///
/// 組札は Ace から順に積むので、一番上のランクがそのまま枚数になるよ。
pub fn foundation_card_count(foundation: &[Option<Card>]) -> usize {
    foundation
        .iter()
        .flatten()
        .map(|card| card.rank().value() as usize)
        .sum()
}

