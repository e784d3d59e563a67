// src/config/deal.rs
//! 配り方 (Deal) とエンジンの設定を定義するよ！
//! 列ごとに何枚配るか、組札への自動移動をするかどうか、など。

use serde::{Serialize, Deserialize};

use crate::logic::deck::DOUBLE_DECK_SIZE;

// --- 基準の配り方 ---
pub const REFERENCE_COLUMNS: usize = 15; // 場札の列数
pub const REFERENCE_FIRST_COUNT: usize = 8; // 最初の列グループに配る枚数
pub const REFERENCE_STEP_DOWN: usize = 2; // グループが変わるごとに減らす枚数
pub const REFERENCE_GROUP_SIZE: usize = 5; // 何列ごとに枚数を減らすか

/// 列ごとに配る枚数のリストだよ。`counts[c]` が列 `c` に配る枚数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealSchedule {
    counts: Vec<usize>,
}

impl DealSchedule {
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts }
    }

    /// 全列に同じ枚数を配る。
    pub fn uniform(num_columns: usize, per_column: usize) -> Self {
        Self::new(vec![per_column; num_columns])
    }

    /// `first` 枚から始めて、`every` 列ごとに `step_down` 枚ずつ減らす (0 で止まる)。
    ///
    /// 例: `stepped(15, 8, 2, 5)` → 8×5, 6×5, 4×5
    pub fn stepped(num_columns: usize, first: usize, step_down: usize, every: usize) -> Self {
        let every = every.max(1);
        let counts = (0..num_columns)
            .map(|column| first.saturating_sub(step_down * (column / every)))
            .collect();
        Self::new(counts)
    }

    /// 基準の配り方: 15列、8/6/4 枚の段差に、残りの 14枚を列 0 から 1枚ずつ足す。
    /// 9×5, 7×5, 5×4, 4×1 で 104枚ぜんぶ配りきるので山札は空になるよ。
    pub fn reference() -> Self {
        Self::stepped(
            REFERENCE_COLUMNS,
            REFERENCE_FIRST_COUNT,
            REFERENCE_STEP_DOWN,
            REFERENCE_GROUP_SIZE,
        )
        .spread_remainder(DOUBLE_DECK_SIZE)
    }

    /// 合計が `deck_size` になるまで、列 0 から順番に1枚ずつ足していく。
    /// すでに `deck_size` 以上なら何もしない。列が無い時もそのまま。
    pub fn spread_remainder(mut self, deck_size: usize) -> Self {
        let num_columns = self.counts.len();
        if num_columns == 0 {
            return self;
        }
        let remainder = deck_size.saturating_sub(self.total_cards());
        for extra in 0..remainder {
            self.counts[extra % num_columns] += 1;
        }
        self
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 配るのに必要な合計枚数。
    pub fn total_cards(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Default for DealSchedule {
    fn default() -> Self {
        Self::reference()
    }
}

/// カードが組札に乗れる時、自動で移すかどうか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromotionMode {
    /// 動かしたカードが組札に乗れるなら、そのまま組札へ移す。
    Auto,
    /// 自動では移さない。`promote` を呼んだ時だけ移す。
    Manual,
}

impl Default for PromotionMode {
    fn default() -> Self {
        PromotionMode::Auto
    }
}

/// エンジン全体の設定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub num_columns: usize,
    pub schedule: DealSchedule,
    pub promotion: PromotionMode,
}

impl EngineConfig {
    pub fn new(num_columns: usize, schedule: DealSchedule) -> Self {
        Self { num_columns, schedule, promotion: PromotionMode::default() }
    }

    pub fn reference() -> Self {
        Self::new(REFERENCE_COLUMNS, DealSchedule::reference())
    }

    pub fn with_promotion(mut self, promotion: PromotionMode) -> Self {
        self.promotion = promotion;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_schedule_uses_the_whole_double_deck() {
        let schedule = DealSchedule::reference();
        assert_eq!(schedule.len(), 15);
        assert_eq!(&schedule.counts()[0..5], &[9; 5]);
        assert_eq!(&schedule.counts()[5..10], &[7; 5]);
        assert_eq!(&schedule.counts()[10..14], &[5; 4]);
        assert_eq!(schedule.counts()[14], 4);
        assert_eq!(schedule.total_cards(), DOUBLE_DECK_SIZE);
        // 段差の形は崩れない (右へ行くほど少ない)
        assert!(schedule.counts().windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn spread_remainder_wraps_and_never_removes() {
        let schedule = DealSchedule::uniform(3, 1).spread_remainder(8);
        assert_eq!(schedule.counts(), &[3, 3, 2]);

        let full = DealSchedule::uniform(2, 5).spread_remainder(4);
        assert_eq!(full.counts(), &[5, 5], "足りてる時はそのまま");

        assert!(DealSchedule::new(vec![]).spread_remainder(10).is_empty());
    }

    #[test]
    fn literal_fourteen_twelve_ten_needs_more_than_a_double_deck() {
        let schedule = DealSchedule::stepped(15, 14, 2, 5);
        assert_eq!(schedule.total_cards(), 180);
        assert!(schedule.total_cards() > DOUBLE_DECK_SIZE);
    }

    #[test]
    fn stepped_saturates_at_zero() {
        let schedule = DealSchedule::stepped(6, 2, 1, 2);
        assert_eq!(schedule.counts(), &[2, 2, 1, 1, 0, 0]);
    }

    #[test]
    fn uniform_schedule() {
        let schedule = DealSchedule::uniform(4, 3);
        assert_eq!(schedule.counts(), &[3, 3, 3, 3]);
        assert_eq!(schedule.total_cards(), 12);
    }
}
