// src/logic/solvability.rs
//! 盤面の「解けそう度」を見積もる貪欲オートプレイヤーだよ！🤖🃏
//!
//! 固定の優先順位でルールを繰り返し適用して、52枚中何枚を組札に
//! 上げられたかを数える。これは完全な証明器 (ソルバー) じゃなくて
//! ヒューリスティックなお試しプレイ！本当は解ける盤面を低く見積もったり、
//! その逆もありえる。でも速くて決定的だから、ディール候補の採点と
//! 救済判定にはこれで十分なんだ。
//!
//! 大事な性質：乱数を一切使わない純粋関数！
//! 同じ盤面を渡せば、何回呼んでも同じ枚数が返ってくるよ。🎯

use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::config::tuning::{
    FLEXIBLE_ACCEPT_COUNT, FLEXIBLE_MAX_MOVES, FLEXIBLE_MAX_RECYCLES, FLEXIBLE_MAX_STALLED,
    STRICT_ACCEPT_COUNT, STRICT_MAX_MOVES, STRICT_MAX_RECYCLES, STRICT_MAX_STALLED,
};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules::common::foundation_index_for_suit;
use crate::logic::rules::tableau::{can_place_on_tableau, face_up_suffix_len};

/// シミュレーションの厳しさだよ。
///
/// - `Strict`: セッション最初のゲーム用。52枚完走した候補しか合格にしない。
/// - `Flexible`: 普段の配り直しと救済用。だいたい解ければ合格。
///   （完璧な盤面ばかりだと配置が機械的で不自然になるからね！）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationMode {
    Strict,
    Flexible,
}

/// モードごとの打ち切り上限のまとめ。
struct SimulationLimits {
    max_moves: u32,
    max_recycles: u32,
    max_stalled: u32,
}

impl SimulationMode {
    fn limits(self) -> SimulationLimits {
        match self {
            SimulationMode::Strict => SimulationLimits {
                max_moves: STRICT_MAX_MOVES,
                max_recycles: STRICT_MAX_RECYCLES,
                max_stalled: STRICT_MAX_STALLED,
            },
            SimulationMode::Flexible => SimulationLimits {
                max_moves: FLEXIBLE_MAX_MOVES,
                max_recycles: FLEXIBLE_MAX_RECYCLES,
                max_stalled: FLEXIBLE_MAX_STALLED,
            },
        }
    }

    /// このモードで「合格」とみなす上がり枚数。
    pub fn acceptance_threshold(self) -> u8 {
        match self {
            SimulationMode::Strict => STRICT_ACCEPT_COUNT,
            SimulationMode::Flexible => FLEXIBLE_ACCEPT_COUNT,
        }
    }
}

/// 盤面を貪欲ポリシーで最後までプレイして、組札に上がった枚数 (0-52) を返すよ。
///
/// ポリシーは固定priority。上から順に試して、どれかが動いたら最初からやり直し：
/// 1. **安全な組札移動** (auto_move の安全判定つき)
/// 2. **裏向きカードを暴く場札移動** (面を開けられる移動だけ！)
/// 3. **捨て札トップ → 場札**
/// 4. **安全制約なしの組札移動** (1-3が全部空振りのときだけ)
/// 5. **山札をめくる / 捨て札を山札に戻す** (リサイクル回数には上限あり)
///
/// 終了条件は「52枚達成」「手数上限」「リサイクル上限」
/// 「空振り(draw しか起きない)の連続上限」のどれか。
/// 打ち切りはエラーじゃなくて普通の結果！難しい盤面では当然起きるよ。
pub fn simulate_solvability(state: &GameState, mode: SimulationMode) -> u8 {
    let limits = mode.limits();
    let mut sim = state.clone();

    let mut moves: u32 = 0;
    let mut recycles: u32 = 0;
    // 「進展なし」の連続カウンター。draw/リサイクルしか起きてない間だけ増える。
    let mut stalled: u32 = 0;

    while sim.foundation_card_count() < 52 && moves < limits.max_moves && stalled < limits.max_stalled
    {
        // --- ルール1: 安全な組札移動 ---
        if let Some(source) = find_automatic_foundation_move(&sim, true) {
            move_top_to_foundation(&mut sim, source);
            moves += 1;
            stalled = 0;
            continue;
        }

        // --- ルール2: 裏向きカードを暴く場札移動 ---
        if try_reveal_move(&mut sim) {
            moves += 1;
            stalled = 0;
            continue;
        }

        // --- ルール3: 捨て札トップ → 場札 ---
        if try_waste_to_tableau(&mut sim) {
            moves += 1;
            stalled = 0;
            continue;
        }

        // --- ルール4: 安全制約を外した組札移動 ---
        if let Some(source) = find_automatic_foundation_move(&sim, false) {
            move_top_to_foundation(&mut sim, source);
            moves += 1;
            stalled = 0;
            continue;
        }

        // --- ルール5: 山札をめくる ---
        if !sim.stock.is_empty() {
            if let Some(mut card) = sim.stock.pop() {
                card.is_face_up = true;
                sim.waste.push(card);
            }
            moves += 1;
            stalled += 1;
        } else if !sim.waste.is_empty() {
            // 山札が尽きた。捨て札を裏返して山札に戻す！（回数制限つき）
            if recycles >= limits.max_recycles {
                break;
            }
            sim.stock = sim
                .waste
                .drain(..)
                .rev()
                .map(|mut card| {
                    card.is_face_up = false;
                    card
                })
                .collect();
            recycles += 1;
            moves += 1;
            stalled += 1;
        } else {
            // 山札も捨て札も空で、他に何も動かせない。完全な固定点！
            break;
        }
    }

    let solved = sim.foundation_card_count() as u8;
    log::debug!(
        "solvability playout finished: solved={} moves={} recycles={} (mode {:?})",
        solved,
        moves,
        recycles,
        mode
    );
    solved
}

/// 移動元の山のトップを組札へ動かすよ。
/// 移動元は `find_automatic_foundation_move` が見つけたものなので必ず存在する。
fn move_top_to_foundation(state: &mut GameState, source: StackType) {
    let card = match source {
        StackType::Tableau(index) => state.tableau[index as usize].pop(),
        StackType::Waste => state.waste.pop(),
        _ => None,
    };
    if let Some(mut card) = card {
        card.is_face_up = true;
        let pile_index = foundation_index_for_suit(card.suit) as usize;
        state.foundations[pile_index].push(card);
    }
    if let StackType::Tableau(index) = source {
        state.flip_exposed_card(index as usize);
    }
}

/// 裏向きカードを1枚暴ける場札移動を探して、見つかったら実行するよ。
///
/// 対象になるのは「裏向きカードの上に表向きの束が乗っている列」だけ。
/// その束を丸ごと別の列（空列なら K の束だけ）に移せれば、
/// 下の裏向きカードがめくれる！👀
fn try_reveal_move(state: &mut GameState) -> bool {
    for src in 0..state.tableau.len() {
        let column = &state.tableau[src];
        let face_up_len = face_up_suffix_len(column);
        let face_down_len = column.len() - face_up_len;
        // 暴けるカードがない列は対象外
        if face_down_len == 0 || face_up_len == 0 {
            continue;
        }
        let run_bottom = column[face_down_len];

        for dst in 0..state.tableau.len() {
            if dst == src {
                continue;
            }
            if can_place_on_tableau(state.tableau_top(dst), &run_bottom) {
                // 束を src から dst へお引越し！
                let run = state.tableau[src].split_off(face_down_len);
                state.tableau[dst].extend(run);
                state.flip_exposed_card(src);
                return true;
            }
        }
    }
    false
}

/// 捨て札のトップを場札のどこかに置けるなら実行するよ。
fn try_waste_to_tableau(state: &mut GameState) -> bool {
    let Some(card) = state.waste.last().copied() else {
        return false;
    };
    for dst in 0..state.tableau.len() {
        if can_place_on_tableau(state.tableau_top(dst), &card) {
            if let Some(mut moved) = state.waste.pop() {
                moved.is_face_up = true;
                state.tableau[dst].push(moved);
            }
            return true;
        }
    }
    false
}
