// src/error.rs
//! エンジンが返すエラーの型をまとめるよ！
//!
//! どれも「想定内で回復できる」結果なので、パニックじゃなくて `Result` で返す。
//! 呼び出し側 (UI 層) はこれを見てドロップを拒否したり、ボタンを無効化したりする感じ！

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Suit};

/// カード移動が受け付けられなかった理由 (InvalidMove 系) だよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// まだ `new_game` されてない。
    GameNotStarted,
    /// 列インデックスが範囲外。
    ColumnOutOfRange { column: usize, num_columns: usize },
    /// 移動元と移動先が同じ列。
    SameColumn { column: usize },
    /// 空の列からは何も動かせない。
    EmptyColumn { column: usize },
    /// 一番上 (表向き) 以外のカードを動かそうとした。
    NotTopCard { column: usize, card_index: usize, top_index: usize },
    /// ランク/スートのルール違反。
    IllegalPlacement { card: Card, onto: Card },
    /// 組札のどこにも置けない。
    NoFoundationFits { card: Card },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameNotStarted => write!(f, "no game in progress"),
            MoveError::ColumnOutOfRange { column, num_columns } => {
                write!(f, "column {} is out of range (0..{})", column, num_columns)
            }
            MoveError::SameColumn { column } => {
                write!(f, "source and destination are both column {}", column)
            }
            MoveError::EmptyColumn { column } => write!(f, "column {} is empty", column),
            MoveError::NotTopCard { column, card_index, top_index } => write!(
                f,
                "card {} of column {} is face down (only index {} can move)",
                card_index, column, top_index
            ),
            MoveError::IllegalPlacement { card, onto } => {
                write!(f, "{} cannot be placed on {}", card, onto)
            }
            MoveError::NoFoundationFits { card } => {
                write!(f, "no foundation accepts {}", card)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// undo/redo のスタックが空だった時のエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryError {
    NothingToUndo,
    NothingToRedo,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::NothingToUndo => write!(f, "nothing to undo"),
            HistoryError::NothingToRedo => write!(f, "nothing to redo"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// 配り方の設定が不正だった時のエラー。`new_game` だけが失敗して、やり直しできるよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealError {
    /// デッキの枚数が足りない。
    InsufficientDeck { required: usize, available: usize },
    /// 列数とスケジュールの長さが合わない。
    ColumnCountMismatch { num_columns: usize, schedule_len: usize },
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::InsufficientDeck { required, available } => write!(
                f,
                "deal needs {} cards but the deck only has {}",
                required, available
            ),
            DealError::ColumnCountMismatch { num_columns, schedule_len } => write!(
                f,
                "{} columns requested but the deal schedule has {} entries",
                num_columns, schedule_len
            ),
        }
    }
}

impl std::error::Error for DealError {}

/// 組札に積めないカードを積もうとした時のエラー (内部用)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoundationError {
    WrongSuit { expected: Suit, card: Card },
    OutOfSequence { expected_value: u8, card: Card },
    Complete,
}

impl fmt::Display for FoundationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoundationError::WrongSuit { expected, card } => {
                write!(f, "{} does not belong on a {:?} foundation", card, expected)
            }
            FoundationError::OutOfSequence { expected_value, card } => {
                write!(f, "foundation expects value {}, got {}", expected_value, card)
            }
            FoundationError::Complete => write!(f, "foundation is already complete"),
        }
    }
}

impl std::error::Error for FoundationError {}
