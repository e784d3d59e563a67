//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::Card;
use crate::components::tableau::Tableau;

/// 指定されたカードを、場札の `dest_column` 列の一番上に置けるかチェックする。
///
/// `card` が `source_column` の一番上 (表向き) のカードであることは呼び出し側が保証する。
///
/// - 空の列にはなんでも置ける。
/// - 空でない列には、一番上のカードが「同じスート」かつ「ランクがちょうど1つ上」の時だけ置ける。
///   (色違いじゃなくて同じスートで降順に組むルールだよ！)
pub fn can_move(tableau: &Tableau, card: &Card, source_column: usize, dest_column: usize) -> bool {
    let Some(dest) = tableau.column(dest_column) else {
        debug!("[Rule Check] destination column {} does not exist", dest_column);
        return false;
    };

    match dest.top() {
        None => {
            debug!(
                "[Rule Check] Moving {} from column {} onto empty column {}: valid",
                card, source_column, dest_column
            );
            true
        }
        Some(target) => {
            let same_suit = target.suit == card.suit;
            let rank_is_one_less = target.value() == card.value() + 1;
            debug!(
                "[Rule Check] Moving {} from column {} onto {} in column {}. Same suit: {}. Rank is one less: {}.",
                card, source_column, target, dest_column, same_suit, rank_is_one_less
            );
            same_suit && rank_is_one_less
        }
    }
}
