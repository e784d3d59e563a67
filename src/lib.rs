// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // JS 向けの窓口 (SolitaireApp)
pub mod components; // カード、場札、組札、盤面
pub mod config; // 配り方とエンジンの設定
pub mod engine; // GameEngine と undo/redo
pub mod error;
pub mod logic; // デッキ、配る処理、ルール、自動移動

// よく使う型はクレートのトップから使えるようにしておくよ。
pub use app::SolitaireApp;
pub use components::card::{Card, Rank, Suit};
pub use components::game_state::{GameState, GameStatus};
pub use config::{DealSchedule, EngineConfig, PromotionMode};
pub use engine::{GameEngine, GameEvent, MoveOutcome};
pub use error::{DealError, HistoryError, MoveError};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
