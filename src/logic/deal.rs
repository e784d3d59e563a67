// src/logic/deal.rs
//! シャッフルしたデッキを場札の列に配るロジックだよ！

use log::debug;

use crate::components::card::Card;
use crate::components::tableau::{Column, Tableau};
use crate::config::deal::DealSchedule;
use crate::error::DealError;

/// デッキを `schedule` どおりに `num_columns` 列へ配る。
///
/// デッキは山として扱うので、最後の要素が一番上 (最初に配られる)。
/// 列 0 から順番に `schedule[c]` 枚ずつ pop して、pop した順に列へ積むよ。
/// 配りきれなかったカードは山札 (stock) として返す。
///
/// 枚数チェックは配り始める前に全部やるので、エラーの時はデッキに触らない。
pub fn deal(
    mut deck: Vec<Card>,
    num_columns: usize,
    schedule: &DealSchedule,
) -> Result<(Tableau, Vec<Card>), DealError> {
    if schedule.len() != num_columns {
        return Err(DealError::ColumnCountMismatch {
            num_columns,
            schedule_len: schedule.len(),
        });
    }
    let required = schedule.total_cards();
    if deck.len() < required {
        return Err(DealError::InsufficientDeck { required, available: deck.len() });
    }

    let mut columns = Vec::with_capacity(num_columns);
    for &count in schedule.counts() {
        // 末尾 count 枚を切り出して、pop 順 (末尾から) に並べ替える
        let split_at = deck.len() - count;
        let mut cards = deck.split_off(split_at);
        cards.reverse();
        columns.push(Column::from_cards(cards));
    }
    debug!(
        "[Deal] dealt {} cards into {} columns, {} left in stock",
        required,
        num_columns,
        deck.len()
    );
    Ok((Tableau::from_columns(columns), deck))
}
