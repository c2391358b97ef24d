// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄
//! どのカードがどの組札に自動で移動できるか、を判断するんだ。

use log::debug;

use crate::components::stack::{CardSelection, StackType};
use crate::config::rules::FOUNDATION_SIZE;
use crate::logic::board::Board;
use crate::logic::rules;

/// 選んだカードを置ける組札 (Foundation) を探す。
///
/// 見つかった場合は `StackType::Foundation(index)`、無ければ `None`。
pub fn find_automatic_foundation_move(board: &Board, from: CardSelection) -> Option<StackType> {
    let found = (0..FOUNDATION_SIZE as u8)
        .map(StackType::Foundation)
        .find(|&to| rules::is_move_valid(board, from, to));

    match found {
        Some(to) => debug!("[AutoMove] {:?} can go to {:?}", from, to),
        None => debug!("[AutoMove] No suitable foundation for {:?}", from),
    }
    found
}

/// 今すぐ組札へ上げられる選択を全部集める (ヒント表示用)。
pub fn foundation_candidates(board: &Board) -> Vec<CardSelection> {
    board
        .selections()
        .into_iter()
        .filter(|&from| find_automatic_foundation_move(board, from).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::config::rules::GameConfig;
    use crate::logic::deck::create_standard_deck;

    #[test]
    fn test_find_automatic_foundation_move() {
        // 並べたままのデッキで配ると、0列目の一番上は A♣
        let mut board = Board::from_deck(create_standard_deck(), GameConfig::default()).unwrap();
        let ace_of_clubs = CardSelection::Tableau { column: 0, offset: 0 };

        assert_eq!(board.column(0).unwrap().top_card(), Some(Card::new(Suit::Club, Rank::Ace)));
        assert_eq!(
            find_automatic_foundation_move(&board, ace_of_clubs),
            Some(StackType::Foundation(0)),
            "A♣ は空の Club 組札に行けるはず"
        );

        // 1列目の一番上は 3♣。A♣ が上がっても 2♣ が無いので行けない
        let three_of_clubs = CardSelection::Tableau { column: 1, offset: 1 };
        assert_eq!(find_automatic_foundation_move(&board, three_of_clubs), None);

        assert_eq!(foundation_candidates(&board), vec![ace_of_clubs]);
        assert!(board.auto_move_to_foundation(ace_of_clubs));
        assert!(board.column(0).unwrap().is_empty());
        assert!(foundation_candidates(&board).is_empty());
    }
}
