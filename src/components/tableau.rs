// src/components/tableau.rs
//! 場札 (Tableau) のデータ構造だよ！
//!
//! 列 (Column) は下から上の順番でカードを持つ `Vec<Card>`。
//! 表向きなのは一番上 (最後の要素) だけ、というルールは
//! フラグを持たずに「位置」から計算するので、壊れようがないんだ✨

use serde::{Serialize, Deserialize};

use crate::components::card::Card;

/// 場札の1列。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    cards: Vec<Card>,
}

impl Column {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上 (表向き) のカード。空なら None。
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 一番上のカードのインデックス。
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// `index` のカードが表向きか？ 最後の要素だけが true。
    pub fn is_face_up(&self, index: usize) -> bool {
        self.top_index() == Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

/// 場札全体。列の数は配った時に決まって、その後は変わらないよ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    columns: Vec<Column>,
}

impl Tableau {
    /// 空の列を `num_columns` 個持つ場札を作る。
    pub fn with_columns(num_columns: usize) -> Self {
        Self { columns: vec![Column::new(); num_columns] }
    }

    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub(crate) fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    /// 全列のカードをまとめて数える。
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// 全カードを列順・下から順に流すイテレータ。
    pub fn iter_cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|column| column.cards.iter())
    }
}
