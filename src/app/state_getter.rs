//! Gets the current board state and converts it to JSON.

use std::sync::{Arc, Mutex};

use log::{debug, error};

use crate::components::stack::{CardSelection, StackType};
use crate::logic::board::Board;
use crate::protocol::BoardSnapshot;

/// 盤面の状態を取得し、JSON 文字列として返します。
pub fn get_board_state_json(board_arc: &Arc<Mutex<Board>>) -> Result<String, String> {
    let snapshot = {
        let board = match board_arc.lock() {
            Ok(b) => b,
            Err(e) => {
                let error_msg = format!("Failed to lock board for getting state: {}", e);
                error!("{}", error_msg);
                return Err(error_msg);
            }
        };
        BoardSnapshot::from_board(&board)
    };

    match serde_json::to_string(&snapshot) {
        Ok(json_string) => {
            debug!("Serialized board state ({} bytes)", json_string.len());
            Ok(json_string)
        }
        Err(e) => {
            let error_msg = format!("Failed to serialize board state: {}", e);
            error!("{}", error_msg);
            Err(error_msg)
        }
    }
}

/// 選んだカードを置ける場所の一覧を JSON で返します (ドラッグ中のハイライト用)。
pub fn get_legal_targets_json(board_arc: &Arc<Mutex<Board>>, selection_json: &str) -> Result<String, String> {
    let selection: CardSelection = serde_json::from_str(selection_json).map_err(|e| {
        let error_msg = format!("Failed to deserialize selection: {}. JSON: {}", e, selection_json);
        error!("{}", error_msg);
        error_msg
    })?;

    let targets: Vec<StackType> = match board_arc.lock() {
        Ok(board) => board.legal_targets(selection),
        Err(e) => {
            let error_msg = format!("Failed to lock board for legal targets: {}", e);
            error!("{}", error_msg);
            return Err(error_msg);
        }
    };

    serde_json::to_string(&targets).map_err(|e| format!("Failed to serialize legal targets: {}", e))
}
