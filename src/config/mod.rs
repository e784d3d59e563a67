// src/config/mod.rs
//! ゲームの設定値をまとめるモジュールだよ！

pub mod deal;

pub use deal::{DealSchedule, EngineConfig, PromotionMode};
