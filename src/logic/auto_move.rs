// src/logic/auto_move.rs
//! カードの組札への自動移動 (昇格) に関するロジックだよ！🪄✨

use log::debug;

use crate::components::card::Card;
use crate::components::foundation::{Foundations, FOUNDATION_COUNT};
use crate::logic::rules;

/// カードを積める組札を探して、そのインデックスを返す関数だよ。
///
/// スートごとに組札は2つあるので、一番上がちょうど `value - 1` のもの
/// (A なら空のもの) を若い番号から順に探す。見つからなければ None。
pub fn find_automatic_foundation_move(foundations: &Foundations, card: &Card) -> Option<usize> {
    let found = (0..FOUNDATION_COUNT).find(|&i| rules::can_move_to_foundation(foundations, card, i));
    match found {
        Some(index) => debug!("[AutoMove] {} fits foundation [{}]", card, index),
        None => debug!("[AutoMove] no foundation fits {}", card),
    }
    found
}
