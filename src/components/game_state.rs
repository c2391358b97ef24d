// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！全部の組札が King まで積み上がった 🏆
    Won,
    /// 山札も捨て札も空で、もう動かせるカードが無い (手詰まり)
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_status_is_over() {
        assert!(!GameStatus::Playing.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Stalemate.is_over());
    }
}
