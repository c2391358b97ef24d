//! Applies player actions coming from the presentation layer to the board.

use std::sync::{Arc, Mutex};

use log::{error, info};

use crate::logic::board::Board;
use crate::protocol::PlayerAction;

/// 操作を1つ盤面に適用する。盤面が変わったら `Ok(true)`、ルール上できない操作なら `Ok(false)`。
///
/// ロックは操作1回分だけ握る。描画側の読み取りと重ならないようにするため。
pub fn apply_action(board_arc: &Arc<Mutex<Board>>, action: PlayerAction) -> Result<bool, String> {
    let mut board = match board_arc.lock() {
        Ok(b) => b,
        Err(e) => {
            let error_msg = format!("Failed to lock board to apply {:?}: {}", action, e);
            error!("{}", error_msg);
            return Err(error_msg);
        }
    };

    let applied = match action {
        PlayerAction::DrawFromStock => board.draw_from_stock(),
        PlayerAction::Move { from, to } => board.move_card(from, to),
        PlayerAction::AutoMove { from } => board.auto_move_to_foundation(from),
    };
    if applied {
        let status = board.status();
        if status.is_over() {
            info!("Game finished: {:?}", status);
        }
    }
    Ok(applied)
}

/// JSON 文字列の操作をデシリアライズして適用する。
pub fn apply_action_json(board_arc: &Arc<Mutex<Board>>, action_json: &str) -> Result<bool, String> {
    match serde_json::from_str::<PlayerAction>(action_json) {
        Ok(action) => apply_action(board_arc, action),
        Err(e) => {
            let error_msg = format!("Failed to deserialize action: {}. JSON: {}", e, action_json);
            error!("{}", error_msg);
            Err(error_msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::config::rules::GameConfig;
    use crate::logic::deck::create_standard_deck;

    fn ordered_board() -> Arc<Mutex<Board>> {
        let board = Board::from_deck(create_standard_deck(), GameConfig::default()).unwrap();
        Arc::new(Mutex::new(board))
    }

    #[test]
    fn draw_and_auto_move_actions() {
        let board = ordered_board();

        assert_eq!(apply_action_json(&board, r#""DrawFromStock""#), Ok(true));
        assert_eq!(board.lock().unwrap().stock_len(), 21);

        let auto = r#"{"AutoMove":{"from":{"Tableau":{"column":0,"offset":0}}}}"#;
        assert_eq!(apply_action_json(&board, auto), Ok(true));
        assert_eq!(board.lock().unwrap().foundation_card(0), Some(Card::new(Suit::Club, Rank::Ace)));
        assert_eq!(apply_action_json(&board, auto), Ok(false), "空の列からは何も動かないはず");
    }

    #[test]
    fn illegal_move_is_not_an_error() {
        let board = ordered_board();
        let action = r#"{"Move":{"from":{"Tableau":{"column":1,"offset":1}},"to":"Stock"}}"#;
        assert_eq!(apply_action_json(&board, action), Ok(false));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let board = ordered_board();
        assert!(apply_action_json(&board, r#"{"Teleport":{}}"#).is_err());
    }
}
