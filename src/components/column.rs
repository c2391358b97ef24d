// src/components/column.rs

use crate::components::card::Card;
use crate::logic::rules::tableau::is_valid_run;

/// 場札 (Tableau) の1列分だよ！
///
/// 裏向きのカード (`hidden`) と表向きのカード (`revealed`) を別々の Vec で持つ。
/// どちらも下から順 (index 0 が一番下)。`revealed` の最後が、プレイヤーが触れる一番上のカード。
///
/// 裏向きの札が残っているのに表向きの札が空っぽ、という状態にはならないよ。
/// 表向きが空になったら、裏向きの一番上を1枚めくる (draw-up)。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    hidden: Vec<Card>,
    revealed: Vec<Card>,
}

impl Column {
    pub fn new(hidden: Vec<Card>, revealed: Vec<Card>) -> Self {
        let mut column = Self { hidden, revealed };
        column.draw_up();
        column
    }

    /// 裏向き・表向きを合わせた枚数。
    pub fn len(&self) -> usize {
        self.hidden.len() + self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hidden_len(&self) -> usize {
        self.hidden.len()
    }

    pub fn hidden_cards(&self) -> &[Card] {
        &self.hidden
    }

    pub fn revealed_cards(&self) -> &[Card] {
        &self.revealed
    }

    /// 一番上 (表向き) のカード。
    pub fn top_card(&self) -> Option<Card> {
        self.revealed.last().copied()
    }

    /// 列の一番下から数えて `offset` 番目のカード。裏向きの位置なら `None`。
    pub fn card_at(&self, offset: usize) -> Option<Card> {
        let index = offset.checked_sub(self.hidden.len())?;
        self.revealed.get(index).copied()
    }

    /// `offset` から一番上までが、まとめて動かせる列 (run) になっているか。
    pub fn is_run_from(&self, offset: usize) -> bool {
        match offset.checked_sub(self.hidden.len()) {
            Some(index) if index < self.revealed.len() => is_valid_run(&self.revealed[index..]),
            _ => false,
        }
    }

    /// `offset` から上のカードを全部取り除いて返す。
    ///
    /// 表向きが空になって裏向きが残っていれば、1枚めくる。
    /// `offset` が裏向きの位置や範囲外なら何もせずに空の Vec を返すよ。
    pub fn remove_from(&mut self, offset: usize) -> Vec<Card> {
        let index = match offset.checked_sub(self.hidden.len()) {
            Some(index) if index < self.revealed.len() => index,
            _ => return Vec::new(),
        };
        let removed = self.revealed.split_off(index);
        self.draw_up();
        removed
    }

    /// カードの並び (下から順) を表向きの一番上に積む。
    pub fn push_run<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.revealed.extend(cards);
    }

    /// 描画用に、下から順に (カード, 表向きか) を並べたもの。
    pub fn view_all(&self) -> Vec<(Card, bool)> {
        self.hidden
            .iter()
            .map(|&card| (card, false))
            .chain(self.revealed.iter().map(|&card| (card, true)))
            .collect()
    }

    fn draw_up(&mut self) {
        if self.revealed.is_empty() {
            if let Some(card) = self.hidden.pop() {
                self.revealed.push(card);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    /// 裏向き2枚 + 表向き K♠ Q♥ J♣ の列。
    fn sample_column() -> Column {
        Column::new(
            vec![card(Suit::Diamond, Rank::Two), card(Suit::Club, Rank::Nine)],
            vec![
                card(Suit::Spade, Rank::King),
                card(Suit::Heart, Rank::Queen),
                card(Suit::Club, Rank::Jack),
            ],
        )
    }

    #[test]
    fn queries() {
        let column = sample_column();
        assert_eq!(column.len(), 5);
        assert_eq!(column.hidden_len(), 2);
        assert_eq!(column.top_card(), Some(card(Suit::Club, Rank::Jack)));
        assert_eq!(column.card_at(0), None, "裏向きのカードは見えないはず");
        assert_eq!(column.card_at(2), Some(card(Suit::Spade, Rank::King)));
        assert_eq!(column.card_at(5), None);

        let view = column.view_all();
        assert_eq!(view.len(), 5);
        assert_eq!(view[1], (card(Suit::Club, Rank::Nine), false));
        assert_eq!(view[4], (card(Suit::Club, Rank::Jack), true));
    }

    #[test]
    fn run_checks() {
        let column = sample_column();
        assert!(!column.is_run_from(0), "裏向きの位置からは動かせないはず");
        assert!(!column.is_run_from(1));
        assert!(column.is_run_from(2));
        assert!(column.is_run_from(3));
        assert!(column.is_run_from(4), "一番上の1枚は常に列のはず");
        assert!(!column.is_run_from(5), "範囲外は false のはず");

        // 同じ色が続くと途中から下は列にならない
        let broken = Column::new(
            Vec::new(),
            vec![
                card(Suit::Heart, Rank::Eight),
                card(Suit::Diamond, Rank::Seven),
                card(Suit::Spade, Rank::Six),
            ],
        );
        assert!(!broken.is_run_from(0));
        assert!(broken.is_run_from(1));

        // ランクが飛んでいても列にならない
        let gap = Column::new(
            Vec::new(),
            vec![card(Suit::Heart, Rank::Eight), card(Suit::Spade, Rank::Six)],
        );
        assert!(!gap.is_run_from(0));
    }

    #[test]
    fn remove_from_reveals_next_hidden_card() {
        let mut column = sample_column();

        let removed = column.remove_from(3);
        assert_eq!(removed, vec![card(Suit::Heart, Rank::Queen), card(Suit::Club, Rank::Jack)]);
        assert_eq!(column.hidden_len(), 2, "表向きが残っているうちはめくらないはず");

        let removed = column.remove_from(2);
        assert_eq!(removed, vec![card(Suit::Spade, Rank::King)]);
        assert_eq!(column.hidden_len(), 1, "ちょうど1枚めくれるはず");
        assert_eq!(column.top_card(), Some(card(Suit::Club, Rank::Nine)));
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn remove_from_last_card_leaves_empty_column() {
        let mut column = Column::new(Vec::new(), vec![card(Suit::Heart, Rank::Ace)]);
        let removed = column.remove_from(0);
        assert_eq!(removed.len(), 1);
        assert!(column.is_empty());
        assert_eq!(column.top_card(), None);
        assert!(column.view_all().is_empty());
    }

    #[test]
    fn remove_from_hidden_offset_is_noop() {
        let mut column = sample_column();
        assert!(column.remove_from(1).is_empty());
        assert!(column.remove_from(9).is_empty());
        assert_eq!(column, sample_column());
    }

    #[test]
    fn new_column_never_hides_everything() {
        let column = Column::new(vec![card(Suit::Heart, Rank::Ace), card(Suit::Club, Rank::Two)], Vec::new());
        assert_eq!(column.hidden_len(), 1);
        assert_eq!(column.top_card(), Some(card(Suit::Club, Rank::Two)));
    }

    #[test]
    fn push_run_keeps_order() {
        let mut column = Column::new(Vec::new(), vec![card(Suit::Spade, Rank::Seven)]);
        column.push_run(vec![card(Suit::Heart, Rank::Six), card(Suit::Club, Rank::Five)]);
        assert_eq!(column.top_card(), Some(card(Suit::Club, Rank::Five)));
        assert!(column.is_run_from(0));
    }
}
