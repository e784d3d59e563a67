// src/app/protocol.rs

// このファイルは、Rust (WASM) のエンジンと JavaScript の画面側の間で
// やり取りする JSON の形式（プロトコル）を定義するよ！💌
// `Serialize` で Rust のデータ構造 -> JSON 文字列 にして JS に渡す。
use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::{GameState, GameStatus};
use crate::error::{DealError, HistoryError, MoveError};

/// 操作のたびに JS 側へ返すメッセージだよ。
/// `{"type": "State", ...}` か `{"type": "Error", ...}` の形になる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum AppResponse {
    /// 操作が成功した。画面はこの盤面で描き直してね。
    State {
        state: StateView,
        move_count: u32,
        status: GameStatus,
        /// この操作でクリアした時だけ true (タイマーを止めてクリア表示)
        victory: bool,
    },
    /// 操作が拒否された。
    Error { kind: ErrorKind, message: String },
}

/// JS 側がボタンの有効/無効などを切り替えるためのエラーの種類。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidMove,
    NothingToUndo,
    NothingToRedo,
    InsufficientDeck,
    InvalidConfig,
}

impl From<&MoveError> for ErrorKind {
    fn from(_: &MoveError) -> Self {
        ErrorKind::InvalidMove
    }
}

impl From<&HistoryError> for ErrorKind {
    fn from(err: &HistoryError) -> Self {
        match err {
            HistoryError::NothingToUndo => ErrorKind::NothingToUndo,
            HistoryError::NothingToRedo => ErrorKind::NothingToRedo,
        }
    }
}

impl From<&DealError> for ErrorKind {
    fn from(err: &DealError) -> Self {
        match err {
            DealError::InsufficientDeck { .. } => ErrorKind::InsufficientDeck,
            DealError::ColumnCountMismatch { .. } => ErrorKind::InvalidConfig,
        }
    }
}

impl AppResponse {
    pub fn error<E>(err: &E) -> Self
    where
        E: std::fmt::Display,
        for<'a> ErrorKind: From<&'a E>,
    {
        AppResponse::Error { kind: ErrorKind::from(err), message: err.to_string() }
    }
}

/// カード1枚の表示用データ。表向きかどうかを明示して渡すよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardView {
    pub suit: Suit,
    pub rank: Rank,
    pub value: u8,
    pub face_up: bool,
}

/// 盤面の表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StateView {
    /// 列ごとのカード (下から順)。
    pub columns: Vec<Vec<CardView>>,
    /// 組札ごとのカード (下から順、全部表向き)。
    pub foundations: Vec<Vec<Card>>,
    /// 山札に残っている枚数。
    pub stock_count: usize,
}

impl From<&GameState> for StateView {
    fn from(state: &GameState) -> Self {
        let columns = state
            .tableau
            .columns()
            .iter()
            .map(|column| {
                column
                    .cards()
                    .iter()
                    .enumerate()
                    .map(|(index, card)| CardView {
                        suit: card.suit,
                        rank: card.rank,
                        value: card.value(),
                        face_up: column.is_face_up(index),
                    })
                    .collect()
            })
            .collect();
        let foundations = state
            .foundations
            .piles()
            .iter()
            .map(|pile| pile.cards().to_vec())
            .collect();
        Self { columns, foundations, stock_count: state.stock.len() }
    }
}
