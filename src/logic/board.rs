// src/logic/board.rs
//! 1ゲーム分の盤面 (Board) だよ！山札・捨て札・組札・場札を全部まとめて持つ。
//!
//! 盤面を変えられるのは、ここにある操作 (山札をめくる・カードを動かす) だけ。
//! 描画側は問い合わせ用のメソッドで状態を読むだけにしてね。

use std::collections::VecDeque;

use log::{debug, info};

use crate::components::card::{Card, ALL_RANKS};
use crate::components::column::Column;
use crate::components::game_state::GameStatus;
use crate::components::stack::{CardSelection, StackType};
use crate::components::Suit;
use crate::config::rules::{GameConfig, FOUNDATION_SIZE, TABLEAU_SIZE, WASTE_SIZE};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deck::{is_standard_deck, shuffled_deck};
use crate::logic::rules::{self, foundation_index_for, stock_waste};

#[derive(Debug, Clone)]
pub struct Board {
    /// 山札 (裏向き)。先頭が次にめくるカード。
    stock: VecDeque<Card>,
    /// めくり終わった捨て札の戻り先。山札が空になったらこれが次の山札になる。
    recycle: VecDeque<Card>,
    waste: [Option<Card>; WASTE_SIZE],
    /// スートごとの一番上のカード。下のカードは Ace から順に積まれている前提。
    foundation: [Option<Card>; FOUNDATION_SIZE],
    tableau: [Column; TABLEAU_SIZE],
    config: GameConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// デフォルト設定でシャッフルして配る。
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let deck = shuffled_deck(config.seed);
        Self::deal(deck, config)
    }

    /// 並び順が決まったデッキから配る。52枚ちょうど・重複なしでないとエラー。
    pub fn from_deck(deck: Vec<Card>, config: GameConfig) -> Result<Self, String> {
        if !is_standard_deck(&deck) {
            return Err(format!(
                "deck must contain each of the 52 cards exactly once (got {} cards)",
                deck.len()
            ));
        }
        Ok(Self::deal(deck, config))
    }

    /// i 列目 (0 始まり) には裏向き i 枚 + 表向き 1 枚。残り 24 枚が山札になる。
    fn deal(deck: Vec<Card>, config: GameConfig) -> Self {
        let mut cards = deck.into_iter();
        let tableau: [Column; TABLEAU_SIZE] = std::array::from_fn(|i| {
            let hidden: Vec<Card> = cards.by_ref().take(i).collect();
            let revealed: Vec<Card> = cards.by_ref().take(1).collect();
            Column::new(hidden, revealed)
        });
        let stock: VecDeque<Card> = cards.collect();
        info!("Dealt new board: {} cards in stock, rule {:?}", stock.len(), config.empty_column_rule);

        let board = Self {
            stock,
            recycle: VecDeque::new(),
            waste: [None; WASTE_SIZE],
            foundation: [None; FOUNDATION_SIZE],
            tableau,
            config,
        };
        debug_assert_eq!(board.check_invariants(), Ok(()));
        board
    }

    // --- 問い合わせ (描画側向け) ---

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_stock_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn recycle_len(&self) -> usize {
        self.recycle.len()
    }

    pub fn waste(&self) -> &[Option<Card>] {
        &self.waste
    }

    pub fn waste_card(&self, slot: usize) -> Option<Card> {
        self.waste.get(slot).copied().flatten()
    }

    pub fn waste_top_slot(&self) -> Option<usize> {
        stock_waste::waste_top_slot(&self.waste)
    }

    pub fn foundation(&self) -> &[Option<Card>] {
        &self.foundation
    }

    /// 組札 `index` (Club, Diamond, Heart, Spade の順) の一番上のカード。
    pub fn foundation_card(&self, index: usize) -> Option<Card> {
        self.foundation.get(index).copied().flatten()
    }

    pub fn columns(&self) -> &[Column] {
        &self.tableau
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.tableau.get(index)
    }

    /// 列の中身を下から順に (カード, 表向きか) で返す。範囲外なら空。
    pub fn column_view(&self, index: usize) -> Vec<(Card, bool)> {
        self.column(index).map(Column::view_all).unwrap_or_default()
    }

    /// 盤面にある全カード。組札は一番上から Ace までを展開して数える。
    pub fn all_cards(&self) -> Vec<Card> {
        let foundation_cards = self.foundation.iter().flatten().flat_map(|top| {
            ALL_RANKS[..top.rank().value() as usize]
                .iter()
                .map(move |&rank| Card::new(top.suit(), rank))
        });

        self.stock
            .iter()
            .chain(self.recycle.iter())
            .chain(self.waste.iter().flatten())
            .copied()
            .chain(foundation_cards)
            .chain(self.tableau.iter().flat_map(|column| {
                column
                    .hidden_cards()
                    .iter()
                    .chain(column.revealed_cards())
                    .copied()
            }))
            .collect()
    }

    pub fn is_won(&self) -> bool {
        rules::check_win_condition(rules::foundation_card_count(&self.foundation))
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_stalemate() {
            GameStatus::Stalemate
        } else {
            GameStatus::Playing
        }
    }

    /// 山札・戻し札・捨て札が全部空で、意味のある手がもう無い状態。
    ///
    /// 場札どうしの移動は、裏向きがめくれる・組札へ上げられる札が出てくる・すぐ元に戻せない、
    /// のどれかの時だけ「進む手」として数える。同じ札を2列の間で往復させるだけの手は数えない。
    pub fn is_stalemate(&self) -> bool {
        if !self.stock.is_empty() || !self.recycle.is_empty() || self.waste_top_slot().is_some() {
            return false;
        }
        !self.selections().into_iter().any(|from| {
            self.legal_targets(from).into_iter().any(|to| self.is_progress_move(from, to))
        })
    }

    /// 組札へ上げられる札が1枚でもあるか。
    fn has_foundation_move(&self) -> bool {
        self.selections().into_iter().any(|from| {
            (0..FOUNDATION_SIZE as u8).any(|index| self.can_move(from, StackType::Foundation(index)))
        })
    }

    /// 合法手 `from -> to` が盤面を先へ進めるか。組札への手と捨て札からの手はいつも進む手。
    fn is_progress_move(&self, from: CardSelection, to: StackType) -> bool {
        let (source, target) = match (from, to) {
            (CardSelection::Tableau { column, .. }, StackType::Tableau(target)) => (column, target as usize),
            _ => return true,
        };
        let (hidden_before, landing) = match (self.column(source), self.column(target)) {
            (Some(s), Some(t)) => (s.hidden_len(), t.len()),
            _ => return false,
        };

        let mut after = self.clone();
        if !after.apply_move(from, to) {
            return false;
        }
        if after.tableau[source].hidden_len() < hidden_before || after.has_foundation_move() {
            return true;
        }
        let back = CardSelection::Tableau { column: target, offset: landing };
        match tableau_target(source) {
            Some(back_to) => !after.can_move(back, back_to),
            None => true,
        }
    }

    /// 今つかめる全ての選択 (捨て札の一番上 + 各列の動かせる列)。
    pub fn selections(&self) -> Vec<CardSelection> {
        let waste = self.waste_top_slot().map(|slot| CardSelection::Waste { slot });
        let columns = self.tableau.iter().enumerate().flat_map(|(column, pile)| {
            (pile.hidden_len()..pile.len())
                .filter(move |&offset| pile.is_run_from(offset))
                .map(move |offset| CardSelection::Tableau { column, offset })
        });
        waste.into_iter().chain(columns).collect()
    }

    /// そのカード (列) をつかめるか。ハイライト用。
    pub fn is_selectable(&self, from: CardSelection) -> bool {
        rules::selected_card(self, from).is_some()
    }

    /// 選んだカードを置ける場所の一覧。ハイライト用。
    pub fn legal_targets(&self, from: CardSelection) -> Vec<StackType> {
        let foundations = (0..FOUNDATION_SIZE as u8).map(StackType::Foundation);
        let columns = (0..TABLEAU_SIZE as u8).map(StackType::Tableau);
        foundations
            .chain(columns)
            .filter(|&to| self.can_move(from, to))
            .collect()
    }

    // --- 操作 ---

    /// 山札をめくる。
    ///
    /// 今の捨て札は (スロット順のまま) 戻し札の後ろへ。山札が残っていれば最大3枚めくり、
    /// 空なら戻し札を新しい山札にして、今回は何もめくらない。
    /// 何か変わったら true。
    pub fn draw_from_stock(&mut self) -> bool {
        let mut changed = false;
        for slot in self.waste.iter_mut() {
            if let Some(card) = slot.take() {
                self.recycle.push_back(card);
                changed = true;
            }
        }

        if stock_waste::can_deal_from_stock(self.stock.is_empty()) {
            for slot in self.waste.iter_mut() {
                match self.stock.pop_front() {
                    Some(card) => *slot = Some(card),
                    None => break,
                }
            }
            debug!("Drew to waste, {} cards left in stock", self.stock.len());
            changed = true;
        } else if stock_waste::can_reset_stock_from_waste(self.stock.is_empty(), self.recycle.is_empty()) {
            std::mem::swap(&mut self.stock, &mut self.recycle);
            info!("Stock exhausted, recycled {} cards back into stock", self.stock.len());
            changed = true;
        }

        debug_assert_eq!(self.check_invariants(), Ok(()));
        changed
    }

    /// 移動できるかどうか。盤面を変える前に必ずこれで判定するよ。
    pub fn can_move(&self, from: CardSelection, to: StackType) -> bool {
        rules::is_move_valid(self, from, to)
    }

    /// カードを動かす。ルール違反なら何もせず false。
    pub fn move_card(&mut self, from: CardSelection, to: StackType) -> bool {
        if !self.can_move(from, to) {
            debug!("Rejected move {:?} -> {:?}", from, to);
            return false;
        }
        if !self.apply_move(from, to) {
            return false;
        }
        debug!("Moved {:?} -> {:?}", from, to);

        debug_assert_eq!(self.check_invariants(), Ok(()));
        true
    }

    /// 判定済みの手を実際に盤面へ反映する。
    fn apply_move(&mut self, from: CardSelection, to: StackType) -> bool {
        let onto_pile = matches!(to, StackType::Foundation(_) | StackType::Tableau(_));
        debug_assert!(onto_pile, "moves onto {:?} are never valid", to);
        if !onto_pile {
            return false;
        }

        let cards: Vec<Card> = match from {
            CardSelection::Waste { slot } => self.waste[slot].take().into_iter().collect(),
            CardSelection::Tableau { column, offset } => self.tableau[column].remove_from(offset),
        };
        match to {
            StackType::Foundation(index) => self.foundation[index as usize] = cards.last().copied(),
            StackType::Tableau(index) => self.tableau[index as usize].push_run(cards),
            StackType::Stock | StackType::Waste => {}
        }
        true
    }

    /// 組札に自動で置ける場所があれば置く (ダブルクリック用)。
    pub fn auto_move_to_foundation(&mut self, from: CardSelection) -> bool {
        match find_automatic_foundation_move(self, from) {
            Some(to) => self.move_card(from, to),
            None => false,
        }
    }

    pub fn move_waste_to_foundation(&mut self, slot: usize, suit: Suit) -> bool {
        self.move_card(CardSelection::Waste { slot }, StackType::Foundation(foundation_index_for(suit)))
    }

    pub fn move_column_to_foundation(&mut self, column: usize, suit: Suit) -> bool {
        let offset = match self.column(column).and_then(|c| c.len().checked_sub(1)) {
            Some(offset) => offset,
            None => return false,
        };
        self.move_card(
            CardSelection::Tableau { column, offset },
            StackType::Foundation(foundation_index_for(suit)),
        )
    }

    pub fn move_waste_to_column(&mut self, slot: usize, column: usize) -> bool {
        match tableau_target(column) {
            Some(to) => self.move_card(CardSelection::Waste { slot }, to),
            None => false,
        }
    }

    pub fn move_column_run_to_column(&mut self, source: usize, offset: usize, destination: usize) -> bool {
        match tableau_target(destination) {
            Some(to) => self.move_card(CardSelection::Tableau { column: source, offset }, to),
            None => false,
        }
    }

    /// 盤面の不変条件チェック。壊れていたら理由を返す。
    ///
    /// - 52枚がちょうど1枚ずつある (カードの保存)
    /// - 組札 i にはスート i のカードだけ
    /// - 裏向きが残っている列は、必ず表向きが1枚以上ある
    pub fn check_invariants(&self) -> Result<(), String> {
        if !is_standard_deck(&self.all_cards()) {
            return Err(format!("card conservation broken ({} cards on board)", self.all_cards().len()));
        }
        for (index, top) in self.foundation.iter().enumerate() {
            if let Some(card) = top {
                if card.suit().index() != index {
                    return Err(format!("foundation {} holds {}", index, card));
                }
            }
        }
        for (index, column) in self.tableau.iter().enumerate() {
            if column.hidden_len() > 0 && column.top_card().is_none() {
                return Err(format!("column {} has hidden cards but nothing revealed", index));
            }
        }
        Ok(())
    }
}

fn tableau_target(column: usize) -> Option<StackType> {
    u8::try_from(column).ok().map(StackType::Tableau)
}
