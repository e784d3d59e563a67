//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::Card;
use crate::components::foundation::{foundation_suit, Foundations};

/// 指定されたカードが、`foundation_index` 番の組札の一番上に置けるかチェックする。
///
/// - スートが組札のスートと同じ
/// - 組札が空なら A、そうでなければ一番上のランク + 1
pub fn can_move_to_foundation(foundations: &Foundations, card: &Card, foundation_index: usize) -> bool {
    let Some(target_suit) = foundation_suit(foundation_index) else {
        debug!("[Foundation Rule] invalid foundation index {}", foundation_index);
        return false;
    };
    if card.suit != target_suit {
        return false;
    }
    let result = foundations
        .pile(foundation_index)
        .map_or(false, |pile| pile.accepts(card));
    debug!(
        "[Foundation Rule] {} to Foundation({}): {}",
        card, foundation_index, result
    );
    result
}
