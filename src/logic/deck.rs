// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// ダブルデッキなので同じカードが2枚ずつ入るよ。
pub const DECK_COPIES: usize = 2;
/// 1デッキの枚数。
pub const STANDARD_DECK_SIZE: usize = 52;
/// ダブルデッキの枚数 (104枚)。
pub const DOUBLE_DECK_SIZE: usize = STANDARD_DECK_SIZE * DECK_COPIES;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
pub fn build_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(suit, rank))
        .collect()
}

/// 52枚デッキを2つ重ねた104枚のデッキを生成するよ！
/// 順番はスート → ランクの順で、シャッフルはしてない。
pub fn build_double_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DOUBLE_DECK_SIZE);
    for _ in 0..DECK_COPIES {
        deck.extend(build_standard_deck());
    }
    deck
}

/// 渡された乱数生成器でデッキをシャッフルする (Fisher–Yates)。
///
/// `i` を末尾から 1 まで下げながら、`[0, i]` から一様に `j` を選んで入れ替える。
/// 乱数が一様なら n! 通りの並びが全部同じ確率になるよ。
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }
}

/// カードデッキをシャッフルする関数だよ。
///
/// # 引数
/// * `deck` - シャッフルしたいカードデッキへの可変参照。
pub fn shuffle_deck(deck: &mut [Card]) {
    let mut rng = thread_rng(); // 乱数生成器を取得
    shuffle_deck_with(deck, &mut rng);
}

/// シード付きの乱数生成器。同じシードなら同じ配り方になるよ。
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
