//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::card::Card;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストックが空のときに、戻し札 (recycle) をストックとして使い直せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, recycle_is_empty: bool) -> bool {
    stock_is_empty && !recycle_is_empty
}

/// 捨て札のうち、プレイできる一番上のスロット番号。全部空なら `None`。
pub fn waste_top_slot(waste: &[Option<Card>]) -> Option<usize> {
    waste.iter().rposition(Option::is_some)
}

/// 指定スロットの捨て札を動かせるか。一番上のカードだけが動かせるよ。
pub fn can_play_from_waste(waste: &[Option<Card>], slot: usize) -> bool {
    waste_top_slot(waste) == Some(slot)
}
