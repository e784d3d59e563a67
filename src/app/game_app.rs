// src/app/game_app.rs

// --- 必要なものをインポート ---
use wasm_bindgen::prelude::*;
// log クレートのマクロをインポート
use log::{error, info};

use crate::app::protocol::{AppResponse, ErrorKind, StateView};
use crate::components::game_state::GameState;
use crate::config::deal::{DealSchedule, EngineConfig, PromotionMode};
use crate::engine::game_engine::{GameEngine, GameEvent};

/// JavaScript 側から使うゲームの窓口だよ！
///
/// 画面を描く、ドラッグを受け取る、タイマーを回す、みたいなのは全部 JS 側の仕事。
/// JS はここのメソッドを呼んで、返ってきた JSON で画面を描き直すだけ！
/// 変更系のメソッドは全部 `AppResponse` の JSON 文字列を返すよ。
#[wasm_bindgen]
pub struct SolitaireApp {
    engine: GameEngine,
}

#[wasm_bindgen]
impl SolitaireApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("SolitaireApp: Initializing...");
        Self { engine: GameEngine::new(EngineConfig::reference()) }
    }

    /// 列数と列ごとの枚数を指定して新しいゲームを配る。
    pub fn new_game(&mut self, num_columns: u32, schedule: Vec<u32>) -> String {
        let schedule = DealSchedule::new(schedule.into_iter().map(|count| count as usize).collect());
        let result = self.engine.new_game(num_columns as usize, &schedule);
        self.respond_with_state(result)
    }

    /// 基準の配り方 (15列) で新しいゲームを配る。
    /// 直前にカスタムの配り方で遊んでいても、必ず基準の形に戻すよ。
    pub fn new_game_reference(&mut self) -> String {
        let config = EngineConfig::reference();
        let result = self.engine.new_game(config.num_columns, &config.schedule);
        self.respond_with_state(result)
    }

    /// シード付きで基準の配り方を配る (同じシードなら同じ盤面)。
    pub fn new_game_seeded(&mut self, seed: u64) -> String {
        let config = EngineConfig::reference();
        let result = self.engine.new_game_with_seed(config.num_columns, &config.schedule, seed);
        self.respond_with_state(result)
    }

    /// カード移動 (ドロップされた時に呼ぶ)。
    pub fn attempt_move(&mut self, source_column: u32, source_card_index: u32, dest_column: u32) -> String {
        let result = self.engine.attempt_move(
            source_column as usize,
            source_card_index as usize,
            dest_column as usize,
        );
        self.respond_with_state(result.map(|outcome| outcome.state))
    }

    /// 列の一番上のカードを組札へ。
    pub fn promote(&mut self, column: u32) -> String {
        let result = self.engine.promote(column as usize);
        self.respond_with_state(result.map(|outcome| outcome.state))
    }

    pub fn undo(&mut self) -> String {
        let result = self.engine.undo();
        self.respond_with_state(result)
    }

    pub fn redo(&mut self) -> String {
        let result = self.engine.redo();
        self.respond_with_state(result)
    }

    /// 今の盤面 (読み取り専用)。
    pub fn current_state(&self) -> String {
        self.render(&AppResponse::State {
            state: StateView::from(self.engine.state()),
            move_count: self.engine.move_count(),
            status: self.engine.status(),
            victory: false,
        })
    }

    pub fn move_count(&self) -> u32 {
        self.engine.move_count()
    }

    pub fn can_undo(&self) -> bool {
        self.engine.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.engine.can_redo()
    }

    pub fn is_won(&self) -> bool {
        self.engine.is_won()
    }

    /// 組札への自動移動の ON/OFF を切り替える。
    pub fn set_auto_promotion(&mut self, enabled: bool) {
        let mode = if enabled { PromotionMode::Auto } else { PromotionMode::Manual };
        self.engine.set_promotion(mode);
    }
}

// wasm_bindgen を付けない内部用のヘルパーたち
impl SolitaireApp {
    /// エンジンの結果を JSON にする。たまったイベントはここで取り出して、
    /// Victory があれば `victory: true` を付けるよ。
    fn respond_with_state<E>(&mut self, result: Result<GameState, E>) -> String
    where
        E: std::fmt::Display,
        for<'a> ErrorKind: From<&'a E>,
    {
        let victory = self
            .engine
            .drain_events()
            .iter()
            .any(|event| *event == GameEvent::Victory);
        match result {
            Ok(state) => self.render(&AppResponse::State {
                state: StateView::from(&state),
                move_count: self.engine.move_count(),
                status: self.engine.status(),
                victory,
            }),
            Err(err) => self.render(&AppResponse::error(&err)),
        }
    }

    fn render(&self, response: &AppResponse) -> String {
        match serde_json::to_string(response) {
            Ok(json) => json,
            Err(e) => {
                error!("SolitaireApp: Failed to serialize response: {}", e);
                r#"{"type":"Error","kind":"InvalidConfig","message":"serialization failed"}"#.to_string()
            }
        }
    }
}

impl Default for SolitaireApp {
    fn default() -> Self {
        Self::new()
    }
}
