// src/config/mod.rs
//! ゲームの設定値や定数をまとめるモジュールだよ！

pub mod rules;
