// src/components/game_state.rs

// serde を使う宣言！スナップショットを JSON にして JS 側に渡すよ！
use serde::{Serialize, Deserialize};
use std::collections::HashMap;

use itertools::Itertools;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::foundation::Foundations;
use crate::components::tableau::Tableau;
use crate::logic::deck::DECK_COPIES;

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// `new_game` 前は Uninitialized、配り終わったら Playing、
/// 組札が全部そろったら Won 🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// まだゲームが始まってない
    Uninitialized,
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆
    Won,
}

/// ある瞬間の盤面のスナップショット (場札 + 組札 + 残りの山札)。
///
/// `Clone` は中身の `Vec` ごと深くコピーするので、
/// 取ったあとで盤面を動かしてもスナップショットは変わらないよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub tableau: Tableau,
    pub foundations: Foundations,
    /// 配りきれなかったカード。配った後は変化しない (基準の配り方なら空)。
    pub stock: Vec<Card>,
}

impl GameState {
    pub fn new(tableau: Tableau, foundations: Foundations, stock: Vec<Card>) -> Self {
        Self { tableau, foundations, stock }
    }

    /// 何も無い盤面 (Uninitialized 用)。
    pub fn empty() -> Self {
        Self::new(Tableau::default(), Foundations::new(), Vec::new())
    }

    /// 場札・組札・山札を全部合わせた枚数。
    pub fn total_cards(&self) -> usize {
        self.tableau.card_count() + self.foundations.card_count() + self.stock.len()
    }

    /// 全カードを場所に関係なく流すイテレータ。
    pub fn iter_cards(&self) -> impl Iterator<Item = &Card> {
        self.tableau
            .iter_cards()
            .chain(self.foundations.iter_cards())
            .chain(self.stock.iter())
    }

    /// (スート, ランク) ごとの枚数。
    pub fn card_counts(&self) -> HashMap<Card, usize> {
        self.iter_cards().copied().counts()
    }

    /// ダブルデッキのカードが全部、ちょうど2枚ずつそろっているか？
    /// カードは移動するだけで、増えたり消えたりしないはず！
    pub fn is_conserved(&self) -> bool {
        let counts = self.card_counts();
        let full_set = ALL_SUITS.len() * ALL_RANKS.len();
        counts.len() == full_set && counts.values().all(|&count| count == DECK_COPIES)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::empty()
    }
}
