// src/app/game_app_tests.rs
// SolitaireApp (JS 向けの窓口) のテスト！
// wasm32 では wasm-bindgen-test、それ以外では普通の #[test] で動くよ。

use super::game_app::SolitaireApp;
use super::protocol::{AppResponse, ErrorKind};
use crate::components::game_state::GameStatus;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;

fn parse(json: &str) -> AppResponse {
    serde_json::from_str(json).expect("facade returns valid AppResponse JSON")
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_new_game_reference_returns_state() {
    let mut app = SolitaireApp::new();
    match parse(&app.new_game_reference()) {
        AppResponse::State { state, move_count, status, victory } => {
            assert_eq!(state.columns.len(), 15);
            assert_eq!(state.foundations.len(), 8);
            assert_eq!(state.stock_count, 0);
            assert_eq!(move_count, 0);
            assert_eq!(status, GameStatus::Playing);
            assert!(!victory);
            for column in &state.columns {
                let face_up: Vec<bool> = column.iter().map(|card| card.face_up).collect();
                let last = face_up.len().saturating_sub(1);
                for (index, up) in face_up.iter().enumerate() {
                    assert_eq!(*up, index == last, "表向きは一番上だけ");
                }
            }
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_errors_are_tagged_by_kind() {
    let mut app = SolitaireApp::new();
    match parse(&app.new_game(15, vec![14, 14, 14, 14, 14, 12, 12, 12, 12, 12, 10, 10, 10, 10, 10])) {
        AppResponse::Error { kind, .. } => assert_eq!(kind, ErrorKind::InsufficientDeck),
        other => panic!("unexpected response: {:?}", other),
    }
    match parse(&app.new_game(3, vec![1, 1])) {
        AppResponse::Error { kind, .. } => assert_eq!(kind, ErrorKind::InvalidConfig),
        other => panic!("unexpected response: {:?}", other),
    }

    assert!(matches!(parse(&app.new_game(4, vec![2, 2, 2, 0])), AppResponse::State { .. }));
    match parse(&app.undo()) {
        AppResponse::Error { kind, .. } => assert_eq!(kind, ErrorKind::NothingToUndo),
        other => panic!("unexpected response: {:?}", other),
    }
    match parse(&app.redo()) {
        AppResponse::Error { kind, .. } => assert_eq!(kind, ErrorKind::NothingToRedo),
        other => panic!("unexpected response: {:?}", other),
    }
    match parse(&app.attempt_move(0, 0, 3)) {
        AppResponse::Error { kind, message } => {
            assert_eq!(kind, ErrorKind::InvalidMove);
            assert!(message.contains("face down"), "message: {}", message);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_move_then_undo_through_the_facade() {
    let mut app = SolitaireApp::new();
    app.set_auto_promotion(false);
    app.new_game(4, vec![2, 2, 2, 0]);

    // 空の列 3 へはどのカードでも置ける
    match parse(&app.attempt_move(0, 1, 3)) {
        AppResponse::State { state, move_count, .. } => {
            assert_eq!(move_count, 1);
            assert_eq!(state.columns[0].len(), 1);
            assert_eq!(state.columns[3].len(), 1);
            assert!(state.columns[0][0].face_up, "下のカードがめくれる");
        }
        other => panic!("unexpected response: {:?}", other),
    }
    assert!(app.can_undo());
    assert!(!app.can_redo());

    assert!(matches!(parse(&app.undo()), AppResponse::State { .. }));
    assert!(app.can_redo());
    assert_eq!(app.move_count(), 1);
    assert!(!app.is_won());

    match parse(&app.current_state()) {
        AppResponse::State { state, .. } => {
            assert_eq!(state.columns[0].len(), 2);
            assert!(state.columns[3].is_empty());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_reference_deal_after_a_custom_game() {
    let mut app = SolitaireApp::new();
    assert!(matches!(parse(&app.new_game(4, vec![2, 2, 2, 0])), AppResponse::State { .. }));

    match parse(&app.new_game_reference()) {
        AppResponse::State { state, .. } => {
            assert_eq!(state.columns.len(), 15, "カスタムの4列じゃなくて基準の15列");
            assert_eq!(state.stock_count, 0);
            let dealt: usize = state.columns.iter().map(Vec::len).sum();
            assert_eq!(dealt, 104);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}
