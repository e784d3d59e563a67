// src/logic/mod.rs
//! 画面に依存しないゲームロジック (デッキ、配り方、ルール、自動移動) をまとめるよ！

pub mod auto_move;
pub mod deal;
pub mod deck;
pub mod rules;
