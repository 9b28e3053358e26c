// src/logic/rules/tests.rs
//! ルールをまたぐ移動検証のシナリオテストだよ！
//! 個々の述語のテストは各ファイルに、組み合わせはここに置く方針。

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::rules::move_validation::{validate_move, GameMove, MoveRejected};

/// テスト用の小さな盤面を作るヘルパー。
/// 列0: 裏向き9♣ の上に 表向き8♠、列1: 表向きQ♥、列2: 空。
/// 捨て札: J♠ がトップ。組札❤️: A,2。
fn scenario_state() -> GameState {
    let mut state = GameState::new_empty();
    state.tableau[0].push(Card::face_down(Suit::Club, Rank::Nine));
    state.tableau[0].push(Card::face_up(Suit::Spade, Rank::Eight));
    state.tableau[1].push(Card::face_up(Suit::Heart, Rank::Queen));
    state.waste.push(Card::face_up(Suit::Diamond, Rank::Ten));
    state.waste.push(Card::face_up(Suit::Spade, Rank::Jack));
    state.foundations[0].push(Card::face_up(Suit::Heart, Rank::Ace));
    state.foundations[0].push(Card::face_up(Suit::Heart, Rank::Two));
    state
}

#[test]
fn waste_top_onto_tableau_queen() {
    let state = scenario_state();
    // 捨て札トップの黒J は、赤Q (列1) に置けるはず！
    let game_move = GameMove::MoveToTableau { from: StackType::Waste, to: 1, count: 1 };
    assert_eq!(validate_move(&state, &game_move), Ok(()), "黒J は赤Q に乗るはず");
}

#[test]
fn waste_onto_wrong_rank_is_rejected() {
    let state = scenario_state();
    // 黒J を 黒8 (列0) には置けない。色も同じだしランクも飛んでる！
    let game_move = GameMove::MoveToTableau { from: StackType::Waste, to: 0, count: 1 };
    assert_eq!(
        validate_move(&state, &game_move),
        Err(MoveRejected::TableauRuleViolation),
        "ルール違反の場札移動が通ってしまった！"
    );
}

#[test]
fn only_kings_to_empty_columns() {
    let state = scenario_state();
    // 列2 は空。捨て札トップの J は置けない。
    let jack_move = GameMove::MoveToTableau { from: StackType::Waste, to: 2, count: 1 };
    assert_eq!(validate_move(&state, &jack_move), Err(MoveRejected::TableauRuleViolation));

    // K をトップに据えた盤面なら空列に置けるはず。
    let mut state2 = scenario_state();
    state2.waste.push(Card::face_up(Suit::Heart, Rank::King));
    let king_move = GameMove::MoveToTableau { from: StackType::Waste, to: 2, count: 1 };
    assert_eq!(validate_move(&state2, &king_move), Ok(()), "空列に K は置けるはず");
}

#[test]
fn cannot_grab_face_down_cards() {
    let state = scenario_state();
    // 列0 の表向きは1枚だけなのに、2枚つかもうとするとダメ！
    let game_move = GameMove::MoveToTableau { from: StackType::Tableau(0), to: 1, count: 2 };
    assert_eq!(validate_move(&state, &game_move), Err(MoveRejected::FaceDownCard));
}

#[test]
fn foundation_move_checks_suit_and_rank() {
    let mut state = scenario_state();
    state.tableau[3].push(Card::face_up(Suit::Heart, Rank::Three));

    // ❤️3 は ❤️A,2 の上に乗るはず！
    let ok_move = GameMove::MoveToFoundation { from: StackType::Tableau(3), suit: Suit::Heart };
    assert_eq!(validate_move(&state, &ok_move), Ok(()));

    // 捨て札トップの ♠J は ♠組札（空）には乗らない。
    let bad_move = GameMove::MoveToFoundation { from: StackType::Waste, suit: Suit::Spade };
    assert_eq!(validate_move(&state, &bad_move), Err(MoveRejected::FoundationRuleViolation));

    // スートの食い違い（❤️3 を ♠組札へ）は問答無用で却下！
    let mismatched = GameMove::MoveToFoundation { from: StackType::Tableau(3), suit: Suit::Spade };
    assert_eq!(validate_move(&state, &mismatched), Err(MoveRejected::FoundationRuleViolation));
}

#[test]
fn invalid_sources_are_rejected() {
    let state = scenario_state();

    // 山札や組札を移動元にはできない！
    let from_stock = GameMove::MoveToTableau { from: StackType::Stock, to: 1, count: 1 };
    assert_eq!(validate_move(&state, &from_stock), Err(MoveRejected::InvalidSource(StackType::Stock)));

    let from_foundation = GameMove::MoveToFoundation { from: StackType::Foundation(0), suit: Suit::Heart };
    assert_eq!(
        validate_move(&state, &from_foundation),
        Err(MoveRejected::InvalidSource(StackType::Foundation(0)))
    );

    // 範囲外の列番号もダメ。
    let out_of_range = GameMove::MoveToTableau { from: StackType::Tableau(9), to: 1, count: 1 };
    assert_eq!(validate_move(&state, &out_of_range), Err(MoveRejected::InvalidPileIndex(9)));

    // 同じ列への移動もダメ。
    let same_column = GameMove::MoveToTableau { from: StackType::Tableau(1), to: 1, count: 1 };
    assert_eq!(validate_move(&state, &same_column), Err(MoveRejected::SameColumn(1)));
}

#[test]
fn draw_needs_at_least_one_card_somewhere() {
    let mut state = GameState::new_empty();
    assert_eq!(
        validate_move(&state, &GameMove::DrawStock),
        Err(MoveRejected::NothingToDraw),
        "山札も捨て札も空なのに draw が通った！"
    );

    state.waste.push(Card::face_up(Suit::Club, Rank::Five));
    assert_eq!(
        validate_move(&state, &GameMove::DrawStock),
        Ok(()),
        "捨て札が残っていれば（山札に戻して）引けるはず"
    );
}
