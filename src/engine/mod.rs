// src/engine/mod.rs
//! ゲームエンジン本体と undo/redo 履歴。

pub mod game_engine;
pub mod history;


pub use game_engine::{GameEngine, GameEvent, MoveOutcome, MAX_PENDING_EVENTS};
pub use history::HistoryManager;
