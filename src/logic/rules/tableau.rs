//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;
use log::trace;

use crate::components::card::{Card, Rank};
use crate::config::rules::EmptyColumnRule;

/// `above` を `below` の上に重ねられるか。色違いで、ランクがちょうど1つ下なら OK！
pub fn can_stack_on(below: &Card, above: &Card) -> bool {
    below.color() != above.color() && below.rank().previous() == Some(above.rank())
}

/// 一番下が `run_bottom` の列 (1枚でも可) を、場札の一番上 `target_top` に置けるかチェックする。
pub fn can_move_to_tableau(
    run_bottom: &Card,
    target_top: Option<&Card>,
    empty_column_rule: EmptyColumnRule,
) -> bool {
    match target_top {
        Some(target) => {
            let result = can_stack_on(target, run_bottom);
            trace!(
                "[Tableau Rule] Moving {}({:?}) onto {}({:?}): {}",
                run_bottom,
                run_bottom.color(),
                target,
                target.color(),
                result
            );
            result
        }
        None => match empty_column_rule {
            EmptyColumnRule::AnyCard => true,
            EmptyColumnRule::KingOnly => run_bottom.rank() == Rank::King,
        },
    }
}

/// 下から順に並んだカードが、色違い・ランク1ずつ降順の「列 (run)」になっているか。
///
/// 空のスライスは列じゃないので false。1枚だけなら true。
pub fn is_valid_run(cards: &[Card]) -> bool {
    !cards.is_empty()
        && cards
            .iter()
            .tuple_windows()
            .all(|(below, above)| can_stack_on(below, above))
}
