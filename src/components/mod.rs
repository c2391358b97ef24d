// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod column; // 場札1列分 (裏向き + 表向き)
pub mod game_state;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use column::Column;
pub use game_state::GameStatus;
pub use stack::{CardSelection, StackType};
