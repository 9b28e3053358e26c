// src/systems/move_card_system.rs
//! Validated move application: the only door through which a live board changes.
//!
//! 盤面を変更する唯一の入り口だよ！🖱️💨
//! 検証 (logic/rules/move_validation.rs) を通った移動だけを適用して、
//! 新しい盤面を返す。却下された移動は呼び出し側の盤面に指一本触れない！

use log::{debug, info};

use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::logic::rules::common::foundation_index_for_suit;
use crate::logic::rules::move_validation::{validate_move, GameMove, MoveRejected};
use crate::logic::rules::win_condition::check_win_condition;

/// Applies a single move to the board and returns the resulting state.
///
/// The input state is borrowed immutably, so a rejected move trivially leaves
/// the caller's state untouched. On success the returned state has the move
/// applied, counters updated, newly exposed tableau cards flipped, and the
/// win condition re-checked.
pub fn apply_move(state: &GameState, game_move: GameMove) -> Result<GameState, MoveRejected> {
    // まずはルールチェック！ダメなら理由を添えてそのまま返す。
    validate_move(state, &game_move)?;

    let mut next = state.clone();
    match game_move {
        GameMove::DrawStock => {
            if next.stock.is_empty() {
                // 山札が空なら、捨て札を裏返して山札に戻す（リサイクル）。
                // 捨て札のトップが山札の一番底になる、物理的にひっくり返すイメージ！
                debug!("recycling {} waste cards back into stock", next.waste.len());
                next.stock = next
                    .waste
                    .drain(..)
                    .rev()
                    .map(|mut card| {
                        card.is_face_up = false;
                        card
                    })
                    .collect();
                next.recycle_count += 1;
            } else if let Some(mut card) = next.stock.pop() {
                card.is_face_up = true;
                next.waste.push(card);
            }
        }

        GameMove::MoveToTableau { from, to, count } => {
            let to_index = to as usize;
            match from {
                StackType::Tableau(src) => {
                    let src_index = src as usize;
                    let split_at = next.tableau[src_index].len() - count as usize;
                    let run = next.tableau[src_index].split_off(split_at);
                    next.tableau[to_index].extend(run);
                    // 持ち上げた下から裏向きカードが出てきたらめくる！
                    if next.flip_exposed_card(src_index) {
                        debug!("flipped a fresh card on tableau column {}", src_index);
                    }
                }
                StackType::Waste => {
                    if let Some(card) = next.waste.pop() {
                        next.tableau[to_index].push(card);
                    }
                }
                // validate_move が通した from はここまでの2種類だけ
                _ => unreachable!("validated move had an impossible source"),
            }
        }

        GameMove::MoveToFoundation { from, suit } => {
            let card = match from {
                StackType::Tableau(src) => next.tableau[src as usize].pop(),
                StackType::Waste => next.waste.pop(),
                _ => unreachable!("validated move had an impossible source"),
            };
            if let Some(card) = card {
                let pile_index = foundation_index_for_suit(suit) as usize;
                next.foundations[pile_index].push(card);
            }
            if let StackType::Tableau(src) = from {
                next.flip_exposed_card(src as usize);
            }
            // 52枚そろったら勝利！🏆
            if check_win_condition(next.foundation_card_count()) {
                info!("all 52 cards on the foundations, game won!");
                next.status = GameStatus::Won;
            }
        }
    }

    next.move_count += 1;
    Ok(next)
}
