// src/engine/game_engine.rs
//! ゲーム全体を動かすエンジン本体だよ！🎮
//!
//! デッキ → 場札/組札 の準備、カード移動、組札への昇格、勝利判定、undo/redo を
//! ぜんぶこの `GameEngine` インスタンスが持つ。グローバルな状態はどこにも無い！
//! 画面の描画はしないので、UI 層は戻り値や `drain_events` を見て描き直してね。

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::foundation::Foundations;
use crate::components::tableau::Column;
use crate::config::deal::{DealSchedule, EngineConfig, PromotionMode};
use crate::engine::history::HistoryManager;
use crate::error::{DealError, HistoryError, MoveError};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deal::deal;
use crate::logic::deck::{build_double_deck, seeded_rng, shuffle_deck_with};
use crate::logic::rules;

/// `drain_events` されずにたまっていられるイベントの上限。
/// 超えたら古いものから捨てる。
pub const MAX_PENDING_EVENTS: usize = 256;

/// UI 層が反応すべき出来事。`drain_events` でまとめて受け取れるよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// 新しいゲームが配られた
    NewGame,
    /// 全部の組札がそろった！🏆 (タイマーを止めて、クリア表示)
    Victory,
    /// 移動が拒否された (ドロップを取り消すだけでOK)
    InvalidMove(MoveError),
    /// undo できるものが無い (undo ボタンを無効化)
    NothingToUndo,
    /// redo できるものが無い (redo ボタンを無効化)
    NothingToRedo,
}

/// 受け付けられた1手の結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// 手を打った後の盤面。
    pub state: GameState,
    /// カードが組札に昇格した場合、その組札のインデックス。
    pub promoted_to: Option<usize>,
    /// この手でクリアしたら true (1回だけ)。
    pub victory: bool,
}

/// ゲームの状態とその操作をまとめたエンジン。
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    state: GameState,
    status: GameStatus,
    history: HistoryManager,
    move_count: u32,
    events: VecDeque<GameEvent>,
}

impl GameEngine {
    /// まだ配っていない (Uninitialized) エンジンを作る。
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: GameState::empty(),
            status: GameStatus::Uninitialized,
            history: HistoryManager::new(),
            move_count: 0,
            events: VecDeque::new(),
        }
    }

    /// 任意の盤面から Playing 状態のエンジンを作る (テストやパズル用)。
    pub fn from_state(state: GameState, config: EngineConfig) -> Self {
        let status = if rules::check_win_condition(&state.foundations) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        Self { state, status, ..Self::new(config) }
    }

    // --- 新しいゲーム ---

    /// ダブルデッキを作ってシャッフルし、配り直す。
    pub fn new_game(&mut self, num_columns: usize, schedule: &DealSchedule) -> Result<GameState, DealError> {
        self.new_game_with_rng(num_columns, schedule, &mut rand::thread_rng())
    }

    /// シード付きで配る。同じシードなら同じ盤面になるよ。
    pub fn new_game_with_seed(
        &mut self,
        num_columns: usize,
        schedule: &DealSchedule,
        seed: u64,
    ) -> Result<GameState, DealError> {
        self.new_game_with_rng(num_columns, schedule, &mut seeded_rng(seed))
    }

    /// 今の設定のまま配り直す。
    pub fn restart(&mut self) -> Result<GameState, DealError> {
        let EngineConfig { num_columns, schedule, .. } = self.config.clone();
        self.new_game(num_columns, &schedule)
    }

    fn new_game_with_rng<R: Rng + ?Sized>(
        &mut self,
        num_columns: usize,
        schedule: &DealSchedule,
        rng: &mut R,
    ) -> Result<GameState, DealError> {
        let mut deck = build_double_deck();
        shuffle_deck_with(&mut deck, rng);
        self.new_game_with_deck(num_columns, schedule, deck)
    }

    /// 並びを指定したデッキをそのまま配る (シャッフルしない)。
    /// デッキは山なので、最後の要素から配られるよ。
    ///
    /// 失敗した時はエンジンの状態を一切変えない。
    pub fn new_game_with_deck(
        &mut self,
        num_columns: usize,
        schedule: &DealSchedule,
        deck: Vec<Card>,
    ) -> Result<GameState, DealError> {
        let (tableau, stock) = deal(deck, num_columns, schedule).map_err(|err| {
            warn!("[Engine] new game rejected: {}", err);
            err
        })?;

        self.config.num_columns = num_columns;
        self.config.schedule = schedule.clone();
        self.state = GameState::new(tableau, Foundations::new(), stock);
        self.status = GameStatus::Playing;
        self.history.clear();
        self.move_count = 0;
        self.events.clear();
        self.push_event(GameEvent::NewGame);
        info!(
            "[Engine] new game: {} columns, {} cards dealt, {} in stock",
            num_columns,
            self.state.tableau.card_count(),
            self.state.stock.len()
        );
        Ok(self.state.clone())
    }

    // --- カード移動 ---

    /// `source_column` の `source_card_index` 番目のカードを `dest_column` に動かす。
    ///
    /// 動かせるのは一番上 (表向き) の1枚だけ。チェックは全部先にやるので、
    /// エラーの時は盤面も履歴も手数も変わらないよ。
    pub fn attempt_move(
        &mut self,
        source_column: usize,
        source_card_index: usize,
        dest_column: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let card = self
            .validate_move(source_column, source_card_index, dest_column)
            .map_err(|err| self.reject(err))?;

        let before = self.state.clone();
        let moved = self
            .state
            .tableau
            .column_mut(source_column)
            .and_then(Column::pop);
        let placed = match (moved, self.state.tableau.column_mut(dest_column)) {
            (Some(card), Some(dest)) => {
                dest.push(card);
                true
            }
            _ => false,
        };
        if !placed {
            self.state = before;
            return Err(self.reject(MoveError::EmptyColumn { column: source_column }));
        }
        info!(
            "[Engine] moved {} from column {} to column {}",
            card, source_column, dest_column
        );

        let promoted_to = match self.config.promotion {
            PromotionMode::Auto => self.promote_top(dest_column),
            PromotionMode::Manual => None,
        };
        Ok(self.commit(before, promoted_to))
    }

    /// 列の一番上のカードを組札へ移す (手動昇格)。1手として数えて、undo もできる。
    pub fn promote(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        let card = self.validate_source(column).map_err(|err| self.reject(err))?;
        if find_automatic_foundation_move(&self.state.foundations, &card).is_none() {
            return Err(self.reject(MoveError::NoFoundationFits { card }));
        }

        let before = self.state.clone();
        match self.promote_top(column) {
            Some(index) => Ok(self.commit(before, Some(index))),
            None => {
                self.state = before;
                Err(self.reject(MoveError::NoFoundationFits { card }))
            }
        }
    }

    /// 手を確定させる: 履歴に記録、手数を増やして、勝利判定。
    fn commit(&mut self, before: GameState, promoted_to: Option<usize>) -> MoveOutcome {
        self.history.record(before);
        self.move_count += 1;
        let victory = self.check_victory();
        MoveOutcome { state: self.state.clone(), promoted_to, victory }
    }

    fn validate_source(&self, column: usize) -> Result<Card, MoveError> {
        if self.status == GameStatus::Uninitialized {
            return Err(MoveError::GameNotStarted);
        }
        let num_columns = self.state.tableau.num_columns();
        let source = self
            .state
            .tableau
            .column(column)
            .ok_or(MoveError::ColumnOutOfRange { column, num_columns })?;
        source.top().copied().ok_or(MoveError::EmptyColumn { column })
    }

    fn validate_move(
        &self,
        source_column: usize,
        source_card_index: usize,
        dest_column: usize,
    ) -> Result<Card, MoveError> {
        if self.status == GameStatus::Uninitialized {
            return Err(MoveError::GameNotStarted);
        }
        let num_columns = self.state.tableau.num_columns();
        for column in [source_column, dest_column] {
            if column >= num_columns {
                return Err(MoveError::ColumnOutOfRange { column, num_columns });
            }
        }
        if source_column == dest_column {
            return Err(MoveError::SameColumn { column: source_column });
        }

        let card = self.validate_source(source_column)?;
        let top_index = self
            .state
            .tableau
            .column(source_column)
            .and_then(Column::top_index)
            .ok_or(MoveError::EmptyColumn { column: source_column })?;
        if source_card_index != top_index {
            return Err(MoveError::NotTopCard {
                column: source_column,
                card_index: source_card_index,
                top_index,
            });
        }

        if !rules::can_move(&self.state.tableau, &card, source_column, dest_column) {
            let onto = self.state.tableau.column(dest_column).and_then(Column::top).copied();
            return Err(match onto {
                Some(onto) => MoveError::IllegalPlacement { card, onto },
                None => MoveError::ColumnOutOfRange { column: dest_column, num_columns },
            });
        }
        Ok(card)
    }

    /// 列の一番上のカードが組札に乗れるなら移す。移した組札の番号を返すよ。
    fn promote_top(&mut self, column: usize) -> Option<usize> {
        let card = *self.state.tableau.column(column)?.top()?;
        let index = find_automatic_foundation_move(&self.state.foundations, &card)?;
        let pile = self.state.foundations.pile_mut(index)?;
        if let Err(err) = pile.push(card) {
            warn!("[Engine] promotion of {} refused: {}", card, err);
            return None;
        }
        self.state.tableau.column_mut(column).and_then(Column::pop);
        info!("[Engine] promoted {} to foundation {}", card, index);
        Some(index)
    }

    fn reject(&mut self, err: MoveError) -> MoveError {
        warn!("[Engine] move rejected: {}", err);
        self.push_event(GameEvent::InvalidMove(err.clone()));
        err
    }

    /// Playing 中に組札が全部そろったら Won にして、Victory を1回だけ出す。
    fn check_victory(&mut self) -> bool {
        if self.status != GameStatus::Playing || !rules::check_win_condition(&self.state.foundations) {
            return false;
        }
        self.status = GameStatus::Won;
        self.push_event(GameEvent::Victory);
        info!("[Engine] all foundations complete after {} moves 🏆", self.move_count);
        true
    }

    // --- undo / redo ---

    /// 1手戻す。戻せるものが無ければ `NothingToUndo`。
    pub fn undo(&mut self) -> Result<GameState, HistoryError> {
        match self.history.undo(self.state.clone()) {
            Ok(previous) => {
                self.state = previous;
                self.refresh_status();
                debug!("[Engine] undo ({} left)", self.history.undo_len());
                Ok(self.state.clone())
            }
            Err(err) => {
                self.push_event(GameEvent::NothingToUndo);
                Err(err)
            }
        }
    }

    /// 1手やり直す。やり直せるものが無ければ `NothingToRedo`。
    pub fn redo(&mut self) -> Result<GameState, HistoryError> {
        match self.history.redo(self.state.clone()) {
            Ok(next) => {
                self.state = next;
                self.refresh_status();
                debug!("[Engine] redo ({} left)", self.history.redo_len());
                Ok(self.state.clone())
            }
            Err(err) => {
                self.push_event(GameEvent::NothingToRedo);
                Err(err)
            }
        }
    }

    /// 盤面を戻した後に、勝利状態を組札から計算し直す。
    fn refresh_status(&mut self) {
        if rules::check_win_condition(&self.state.foundations) {
            if self.status != GameStatus::Won {
                self.status = GameStatus::Playing;
                self.check_victory();
            }
        } else {
            self.status = GameStatus::Playing;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- 読み取り用 ---

    /// 今の盤面のスナップショット (コピー)。
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    /// 今の盤面への参照。
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// `new_game` から受け付けた手の数。undo/redo では変わらない。
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 組札への自動移動の ON/OFF。次の手から効くよ。
    pub fn set_promotion(&mut self, promotion: PromotionMode) {
        self.config.promotion = promotion;
    }

    /// たまったイベントを全部取り出す。
    ///
    /// 呼ばないままでも `MAX_PENDING_EVENTS` 件までしかたまらない
    /// (古いものから捨てる)。取りこぼしたくなければ操作ごとに呼んでね。
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
