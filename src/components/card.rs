// src/components/card.rs

// serde を使う宣言！ゲーム状態を JSON にして JS 側に渡す時に使うよ！
use serde::{Serialize, Deserialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq, Hash: 比較したり HashMap のキーにしたりできるように
/// - Serialize, Deserialize: JSON に変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// A が一番低くて 1、K が一番高くて 13！
/// PartialOrd, Ord もあるから `<` や `>` で大小比較もできるよ👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 全スートの配列。デッキ生成とか組札のスート割り当てで使うよ！
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランクの配列 (A → K の順番！)
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Suit {
    /// 表示用の記号を返すよ。
    pub fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

impl Rank {
    /// ランクを 1..=13 の数値にするよ。(A = 1, K = 13)
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクに戻す。範囲外 (0 とか 14 とか) なら None！
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// ひとつ上のランク。K の上は無いので None。
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }
}

/// カードそのものを表す値だよ！🃏
///
/// 一度作ったら変わらない (immutable) 値として扱うよ。
/// 表向きかどうかは「列の一番上かどうか」で決まるので、カード自身には持たせない！
/// ダブルデッキなので同じ (スート, ランク) のカードが2枚ある点に注意してね。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// ランクの数値 (1..=13)。
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.rank {
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            other => other.value().to_string(),
        };
        write!(f, "{}{}", label, self.suit.symbol())
    }
}
