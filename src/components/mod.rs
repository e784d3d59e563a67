// src/components/mod.rs

// ゲームのデータ部品をまとめるモジュールだよ！
pub mod card;
pub mod foundation; // 組札 🏆
pub mod game_state; // 盤面のスナップショットと進行状態
pub mod tableau; // 場札の列
