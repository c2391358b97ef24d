// src/protocol.rs

// このファイルは、エンジンと描画側 (JavaScript) の間でやり取りするデータの形式を定義するよ！💌
// `Serialize` は Rust のデータ構造 -> JSON 文字列、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameStatus;
pub use crate::components::stack::{CardSelection, StackType};
use crate::logic::auto_move::foundation_candidates;
use crate::logic::board::Board;

/// 表向きのカード1枚分の情報。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    /// "A♥" みたいな表示用の文字列
    pub label: String,
}

impl From<Card> for CardData {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit(),
            rank: card.rank(),
            label: card.to_string(),
        }
    }
}

/// 場札のカード1枚の見え方。裏向きのカードは中身を送らないよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    Hidden,
    Revealed(CardData),
}

/// 描画に必要な盤面の情報をまるごと詰めたもの。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub stock_empty: bool,
    pub stock_count: usize,
    pub recycle_count: usize,
    /// スロット 0..3 の捨て札。空きスロットは `None`。
    pub waste: Vec<Option<CardData>>,
    /// 組札 (Club, Diamond, Heart, Spade の順) の一番上。
    pub foundation: Vec<Option<CardData>>,
    /// 各列を下から順に。
    pub tableau: Vec<Vec<CardView>>,
    /// 今すぐ組札へ上げられるカード (ヒント表示用)。
    pub foundation_hints: Vec<CardSelection>,
    pub status: GameStatus,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let tableau = (0..board.columns().len())
            .map(|index| {
                board
                    .column_view(index)
                    .into_iter()
                    .map(|(card, revealed)| {
                        if revealed {
                            CardView::Revealed(card.into())
                        } else {
                            CardView::Hidden
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            stock_empty: board.is_stock_empty(),
            stock_count: board.stock_len(),
            recycle_count: board.recycle_len(),
            waste: board.waste().iter().map(|slot| slot.map(CardData::from)).collect(),
            foundation: board.foundation().iter().map(|top| top.map(CardData::from)).collect(),
            tableau,
            foundation_hints: foundation_candidates(board),
            status: board.status(),
        }
    }
}

/// 描画側から届くプレイヤーの操作。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// 山札をクリックしてカードをめくる
    DrawFromStock,
    /// カード (または列) を移動させる
    Move { from: CardSelection, to: StackType },
    /// ダブルクリックで組札へ自動移動
    AutoMove { from: CardSelection },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rules::GameConfig;
    use crate::logic::deck::create_standard_deck;

    #[test]
    fn snapshot_hides_face_down_cards() {
        let board = Board::from_deck(create_standard_deck(), GameConfig::default()).unwrap();
        let snapshot = BoardSnapshot::from_board(&board);

        assert_eq!(snapshot.stock_count, 24);
        assert!(!snapshot.stock_empty);
        assert_eq!(snapshot.waste, vec![None, None, None]);
        assert_eq!(snapshot.foundation.len(), 4);
        assert_eq!(snapshot.tableau.len(), 7);
        assert_eq!(snapshot.tableau[2][0], CardView::Hidden);
        assert_eq!(snapshot.tableau[2][1], CardView::Hidden);
        match &snapshot.tableau[2][2] {
            CardView::Revealed(data) => assert_eq!(data.label, "6♣"),
            CardView::Hidden => panic!("一番上は表向きのはず"),
        }
        assert_eq!(snapshot.foundation_hints, vec![CardSelection::Tableau { column: 0, offset: 0 }]);
        assert_eq!(snapshot.status, GameStatus::Playing);
    }

    #[test]
    fn snapshot_json_round_trip() {
        let board = Board::from_deck(create_standard_deck(), GameConfig::default()).unwrap();
        let snapshot = BoardSnapshot::from_board(&board);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""status":"Playing""#));
        assert!(!json.contains("2♣"), "裏向きのカードは JSON に出ないはず");

        let parsed: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn player_action_from_json() {
        let action: PlayerAction = serde_json::from_str(r#""DrawFromStock""#).unwrap();
        assert_eq!(action, PlayerAction::DrawFromStock);

        let action: PlayerAction = serde_json::from_str(
            r#"{"Move":{"from":{"Tableau":{"column":1,"offset":3}},"to":{"Tableau":4}}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            PlayerAction::Move {
                from: CardSelection::Tableau { column: 1, offset: 3 },
                to: StackType::Tableau(4),
            }
        );
    }
}
