//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::foundation::{Foundations, FOUNDATION_COMPLETE_LEN, FOUNDATION_COUNT};

/// ゲームのクリア条件（8つの組札が全部 A〜K までそろっているか）を判定する。
pub fn check_win_condition(foundations: &Foundations) -> bool {
    foundations.piles().len() == FOUNDATION_COUNT
        && is_winning_card_count(foundations.card_count())
        && foundations.all_complete()
}

/// 組札にあるカードの枚数だけで判定する版 (104枚そろえばクリア)。
pub fn is_winning_card_count(foundation_card_count: usize) -> bool {
    foundation_card_count == FOUNDATION_COUNT * FOUNDATION_COMPLETE_LEN
}
