// src/logic/rules/move_validation.rs
//! カード移動リクエストの型と、その妥当性チェックを行うよ。
//!
//! 実際に盤面を書き換えるのは systems/move_card_system.rs の仕事。
//! ここは「この移動、ルール的にアリ？」を判定するだけ！

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::card::{Card, Suit};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::rules::{foundation, tableau};

/// プレイヤー（または自動プレイ）が要求できる移動の種類だよ。
///
/// - `DrawStock`: 山札から1枚めくる。山札が空なら捨て札を山札に戻す。
/// - `MoveToTableau`: 場札の列 or 捨て札のトップから、場札の列へ。
///   `from` に使えるのは `Tableau(i)` と `Waste` だけ！
///   `count` は動かす枚数（捨て札からは常に1枚）。
/// - `MoveToFoundation`: 場札トップ or 捨て札トップを、そのスートの組札へ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMove {
    DrawStock,
    MoveToTableau { from: StackType, to: u8, count: u8 },
    MoveToFoundation { from: StackType, suit: Suit },
}

/// 移動リクエストが却下された理由だよ。
///
/// 例外は投げない方針！不正な移動は値として返して、盤面は無傷のまま。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("stock and waste are both empty, nothing to draw")]
    NothingToDraw,
    #[error("pile index {0} is out of range")]
    InvalidPileIndex(u8),
    #[error("cannot move {0} cards from this pile")]
    InvalidCardCount(u8),
    #[error("source and target are the same column {0}")]
    SameColumn(u8),
    #[error("source pile {0:?} is empty")]
    EmptySource(StackType),
    #[error("{0:?} is not a valid move source")]
    InvalidSource(StackType),
    #[error("cannot move a face-down card")]
    FaceDownCard,
    #[error("tableau placement rule violated")]
    TableauRuleViolation,
    #[error("foundation placement rule violated")]
    FoundationRuleViolation,
}

/// 移動リクエストがルール上可能かを検証するよ。
/// 盤面は一切変更しない！ダメなときは理由 (`MoveRejected`) を返す。
pub fn validate_move(state: &GameState, game_move: &GameMove) -> Result<(), MoveRejected> {
    match game_move {
        GameMove::DrawStock => {
            // 山札か捨て札、どっちかにカードがあれば「引く」は成立する
            // （山札が空なら捨て札を戻してから引き直すため）。
            if state.stock.is_empty() && state.waste.is_empty() {
                Err(MoveRejected::NothingToDraw)
            } else {
                Ok(())
            }
        }

        GameMove::MoveToTableau { from, to, count } => {
            let to_index = *to as usize;
            if to_index >= state.tableau.len() {
                return Err(MoveRejected::InvalidPileIndex(*to));
            }
            let moving_bottom = bottom_card_of_moving_run(state, from, to_index, *count)?;
            if tableau::can_place_on_tableau(state.tableau_top(to_index), moving_bottom) {
                Ok(())
            } else {
                Err(MoveRejected::TableauRuleViolation)
            }
        }

        GameMove::MoveToFoundation { from, suit } => {
            let card = top_card_of_source(state, from)?;
            // 移動先の組札はカード自身のスートで決まる。リクエストのスートと
            // カードのスートが食い違ってたら、それはもうルール違反！
            if card.suit != *suit {
                return Err(MoveRejected::FoundationRuleViolation);
            }
            if foundation::can_place_on_foundation(state.foundation_pile(*suit), card) {
                Ok(())
            } else {
                Err(MoveRejected::FoundationRuleViolation)
            }
        }
    }
}

/// 場札へ動かす束の「一番下のカード」を特定するよ。
/// ついでに移動元まわりの却下理由 (空・裏向き・枚数過多など) も全部ここでチェック！
fn bottom_card_of_moving_run<'a>(
    state: &'a GameState,
    from: &StackType,
    to_index: usize,
    count: u8,
) -> Result<&'a Card, MoveRejected> {
    if count == 0 {
        return Err(MoveRejected::InvalidCardCount(0));
    }
    match from {
        StackType::Tableau(src) => {
            let src_index = *src as usize;
            if src_index >= state.tableau.len() {
                return Err(MoveRejected::InvalidPileIndex(*src));
            }
            if src_index == to_index {
                return Err(MoveRejected::SameColumn(*src));
            }
            let column = &state.tableau[src_index];
            if column.is_empty() {
                return Err(MoveRejected::EmptySource(*from));
            }
            // 表向きの束の長さを超えてつかむのはダメ！
            // (裏向きカードごと持ち上げようとしている、ということだからね)
            if count as usize > tableau::face_up_suffix_len(column) {
                return Err(MoveRejected::FaceDownCard);
            }
            Ok(&column[column.len() - count as usize])
        }
        StackType::Waste => {
            if count != 1 {
                return Err(MoveRejected::InvalidCardCount(count));
            }
            state
                .waste
                .last()
                .ok_or(MoveRejected::EmptySource(StackType::Waste))
        }
        other => Err(MoveRejected::InvalidSource(*other)),
    }
}

/// 組札へ動かせるのは「山のトップ1枚」だけ。その1枚を特定するよ。
fn top_card_of_source<'a>(
    state: &'a GameState,
    from: &StackType,
) -> Result<&'a Card, MoveRejected> {
    match from {
        StackType::Tableau(src) => {
            let src_index = *src as usize;
            if src_index >= state.tableau.len() {
                return Err(MoveRejected::InvalidPileIndex(*src));
            }
            let card = state.tableau[src_index]
                .last()
                .ok_or(MoveRejected::EmptySource(*from))?;
            if !card.is_face_up {
                return Err(MoveRejected::FaceDownCard);
            }
            Ok(card)
        }
        StackType::Waste => state
            .waste
            .last()
            .ok_or(MoveRejected::EmptySource(StackType::Waste)),
        other => Err(MoveRejected::InvalidSource(*other)),
    }
}

// テストは logic/rules/tests.rs にまとめてあるよ！
