// src/app/mod.rs
//! JavaScript 側から呼ぶ窓口 (SolitaireApp) と、やり取りする JSON の形を置くモジュールだよ！

pub mod game_app;
pub mod protocol;

#[cfg(test)]
mod game_app_tests;

pub use game_app::SolitaireApp;
