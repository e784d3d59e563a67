// src/components/foundation.rs
//! 組札 (Foundation) のデータ構造だよ！🏆
//!
//! ダブルデッキなので組札はスートごとに2つ、全部で8つ。
//! 約束事: 0,1: Heart ❤️ / 2,3: Diamond ♦️ / 4,5: Club ♣️ / 6,7: Spade ♠️

use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Rank, Suit, ALL_SUITS};
use crate::error::FoundationError;

/// 組札の数 (4スート × 2デッキ)。
pub const FOUNDATION_COUNT: usize = 8;
/// 1つの組札が完成する枚数 (A〜K)。
pub const FOUNDATION_COMPLETE_LEN: usize = 13;

/// 組札のインデックスから対応するスートを取得する。範囲外なら None。
pub fn foundation_suit(foundation_index: usize) -> Option<Suit> {
    if foundation_index >= FOUNDATION_COUNT {
        return None;
    }
    ALL_SUITS.get(foundation_index / 2).copied()
}

/// 1つの組札。A から順番に同じスートが積まれていくよ。
///
/// 不変条件: 一番上のカードの値 == 枚数。`push` がこれを守らないカードを拒否する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<Card>,
}

impl Foundation {
    pub fn new(suit: Suit) -> Self {
        Self { suit, cards: Vec::with_capacity(FOUNDATION_COMPLETE_LEN) }
    }

    pub fn suit(&self) -> Suit {
        self.suit
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

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == FOUNDATION_COMPLETE_LEN
    }

    /// 次に積めるランク。完成済みなら None。
    pub fn next_rank(&self) -> Option<Rank> {
        match self.top() {
            None => Some(Rank::Ace),
            Some(top) => top.rank.next(),
        }
    }

    /// このカードを次に積めるか？
    pub fn accepts(&self, card: &Card) -> bool {
        card.suit == self.suit && self.next_rank() == Some(card.rank)
    }

    /// カードを積む。ルールに合わないカードはエラーで返すよ。
    pub fn push(&mut self, card: Card) -> Result<(), FoundationError> {
        if card.suit != self.suit {
            return Err(FoundationError::WrongSuit { expected: self.suit, card });
        }
        match self.next_rank() {
            None => Err(FoundationError::Complete),
            Some(rank) if rank != card.rank => Err(FoundationError::OutOfSequence {
                expected_value: rank.value(),
                card,
            }),
            Some(_) => {
                self.cards.push(card);
                Ok(())
            }
        }
    }
}

/// 8つの組札をまとめたもの。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundations {
    piles: Vec<Foundation>,
}

impl Foundations {
    /// 空の組札を8つ作る。
    pub fn new() -> Self {
        let piles = (0..FOUNDATION_COUNT)
            .filter_map(foundation_suit)
            .map(Foundation::new)
            .collect();
        Self { piles }
    }

    pub fn piles(&self) -> &[Foundation] {
        &self.piles
    }

    pub fn pile(&self, index: usize) -> Option<&Foundation> {
        self.piles.get(index)
    }

    pub(crate) fn pile_mut(&mut self, index: usize) -> Option<&mut Foundation> {
        self.piles.get_mut(index)
    }

    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Foundation::len).sum()
    }

    pub fn iter_cards(&self) -> impl Iterator<Item = &Card> {
        self.piles.iter().flat_map(|pile| pile.cards.iter())
    }

    /// 全部の組札が完成しているか。
    pub fn all_complete(&self) -> bool {
        self.piles.iter().all(Foundation::is_complete)
    }
}

impl Default for Foundations {
    fn default() -> Self {
        Self::new()
    }
}
