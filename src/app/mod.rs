// src/app/mod.rs
//! SolitaireApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod action_handler;
pub mod game_app;
pub mod state_getter;
