// src/logic/mod.rs
//! ゲームのロジック (盤面、デッキ、ルール判定) をまとめるモジュールだよ！

pub mod auto_move;
pub mod board;
pub mod deck;
pub mod rules;

pub use board::Board;
