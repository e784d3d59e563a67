// src/engine/history.rs
//! undo/redo 用のスナップショット履歴だよ！⏪⏩

use crate::components::game_state::GameState;
use crate::error::HistoryError;

/// 過去の盤面 (undo スタック) と、戻した後の未来の盤面 (redo スタック) を持つよ。
///
/// スナップショットは全部 `GameState` の深いコピーなので、
/// 生きている盤面を動かしても履歴は変わらない。
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    undo_stack: Vec<GameState>,
    redo_stack: Vec<GameState>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい手を打つ前の盤面を記録する。redo スタックは捨てる。
    pub fn record(&mut self, before: GameState) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// 1手戻す。今の盤面を redo 側に積んで、undo 側から1つ取り出して返す。
    pub fn undo(&mut self, current: GameState) -> Result<GameState, HistoryError> {
        let previous = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        self.redo_stack.push(current);
        Ok(previous)
    }

    /// 1手やり直す。undo の逆！
    pub fn redo(&mut self, current: GameState) -> Result<GameState, HistoryError> {
        let next = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        self.undo_stack.push(current);
        Ok(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    fn state_with_stock(n: usize) -> GameState {
        let mut state = GameState::empty();
        state.stock = vec![Card::new(Suit::Heart, Rank::Ace); n];
        state
    }

    #[test]
    fn empty_history_reports_nothing_to_do() {
        let mut history = HistoryManager::new();
        assert_eq!(history.undo(GameState::empty()), Err(HistoryError::NothingToUndo));
        assert_eq!(history.redo(GameState::empty()), Err(HistoryError::NothingToRedo));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_redo_walks_both_stacks() {
        let mut history = HistoryManager::new();
        history.record(state_with_stock(0));

        let restored = history.undo(state_with_stock(1)).expect("one entry");
        assert_eq!(restored, state_with_stock(0));
        assert_eq!((history.undo_len(), history.redo_len()), (0, 1));

        let redone = history.redo(restored).expect("one redo entry");
        assert_eq!(redone, state_with_stock(1));
        assert_eq!((history.undo_len(), history.redo_len()), (1, 0));
    }

    #[test]
    fn recording_clears_redo() {
        let mut history = HistoryManager::new();
        history.record(state_with_stock(0));
        let _ = history.undo(state_with_stock(1));
        assert!(history.can_redo());

        history.record(state_with_stock(0));
        assert!(!history.can_redo());
        assert_eq!(history.redo(state_with_stock(2)), Err(HistoryError::NothingToRedo));
    }
}
