// src/systems/rescue_system.rs
//! 進行中のゲームが「実質詰み」に落ちていくのを防ぐ救済システムだよ！🛟
//!
//! 裏向きカードがめくれるたびに呼ばれて、盤面の解けそう度を測り直す。
//! もし悪化していたら、プレイヤーがまだ見ていないカード
//! （場札の裏向き + 山札の全部）だけをこっそり並べ替えて立て直す！
//!
//! 絶対のルール：表向きのカード・組札・捨て札には指一本触れない。
//! プレイヤーから見える景色は、救済の前後で1ピクセルも変わらないんだ。🤫

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::HiddenSlot;
use crate::config::tuning::{
    RESCUE_ACCEPT_COUNT, RESCUE_ATTEMPTS, RESCUE_COOLDOWN_MS, RESCUE_MIN_HIDDEN_CARDS,
    RESCUE_TARGET_COUNT,
};
use crate::logic::solvability::{simulate_solvability, SimulationMode};

/// ミリ秒単位のタイムスタンプ。呼び出し側の時計で測ってもらう方式だよ。
/// （モジュール内にこっそり時刻を持つのは再現性の敵！全部引数で受け取る！）
pub type TimestampMs = u64;

/// 盤面の解けそう度をチェックして、必要なら裏向きカードを並べ替えるよ。
///
/// # 引数
/// * `state`: 現在のライブ盤面。
/// * `now`: 現在時刻（ミリ秒）。
/// * `last_correction`: 前回救済が走った時刻。初回は 0 でOK。
/// * `rng`: 並べ替え候補を作るための乱数生成器。
///
/// # 戻り値
/// * `(新しい盤面, 新しい last_correction)`。
///   救済する必要がなかったときは、盤面はそのままのクローン。
///   タイムスタンプは「重い探索を実際に走らせたとき」だけ `now` に進む。
///
/// # やらないこと
/// * 勝ち確定の盤面・クールダウン中・裏向きカードが少なすぎる盤面には何もしない。
/// * 並べ替えても改善しなかったら、黙って元の盤面を返す（エラー扱いしない）。
pub fn ensure_solvability(
    state: &GameState,
    now: TimestampMs,
    last_correction: TimestampMs,
    rng: &mut impl Rng,
) -> (GameState, TimestampMs) {
    // --- 早期リターン軍団 ---
    if state.is_won() {
        return (state.clone(), last_correction);
    }
    // クールダウン：前回の救済から一定時間あけないと走らない。
    // 連続でカードがめくれたときにCPUを食い尽くさないためのガード！
    if now.saturating_sub(last_correction) < RESCUE_COOLDOWN_MS {
        return (state.clone(), last_correction);
    }
    // 並べ替えられるカードが少なすぎたら意味がないのでスキップ。
    let hidden_slots = collect_hidden_slots(state);
    let hidden_total = hidden_slots.len() + state.stock.len();
    if hidden_total < RESCUE_MIN_HIDDEN_CARDS {
        return (state.clone(), last_correction);
    }

    // --- 現状診断 ---
    let current_solved = simulate_solvability(state, SimulationMode::Flexible);
    if current_solved >= RESCUE_ACCEPT_COUNT {
        debug!(
            "rescue check: board is still healthy ({}/52), nothing to do",
            current_solved
        );
        return (state.clone(), last_correction);
    }

    info!(
        "rescue check: board degraded to {}/52, searching a rearrangement of {} hidden cards",
        current_solved, hidden_total
    );

    // --- 裏向きプールを集めて、並べ替え候補を試す ---
    // プール = 場札の裏向きカード + 山札の全カード。それ以外は聖域！
    let mut pool: Vec<Card> = hidden_slots
        .iter()
        .map(|slot| state.tableau[slot.column as usize][slot.row as usize])
        .collect();
    pool.extend(state.stock.iter().copied());

    let mut best_state: Option<GameState> = None;
    let mut best_solved = current_solved;

    for attempt in 0..RESCUE_ATTEMPTS {
        pool.shuffle(rng);
        let candidate = rebuild_with_hidden_pool(state, &hidden_slots, &pool);
        let solved = simulate_solvability(&candidate, SimulationMode::Flexible);
        if solved > best_solved {
            debug!("rescue attempt {}: improved to {}/52", attempt, solved);
            best_solved = solved;
            best_state = Some(candidate);
        }
        // 十分良くなったら探索打ち切り！
        if best_solved >= RESCUE_TARGET_COUNT {
            break;
        }
    }

    match best_state {
        Some(rescued) => {
            info!(
                "rescue applied: {}/52 -> {}/52 (player-visible cards untouched)",
                current_solved, best_solved
            );
            (rescued, now)
        }
        None => {
            // 改善できなかった。それも普通の結果。盤面はそのまま！
            debug!("rescue search found no improvement, leaving the board as is");
            (state.clone(), now)
        }
    }
}

/// 場札の裏向きカードの座席 (列・行) を全部集めるよ。
fn collect_hidden_slots(state: &GameState) -> Vec<HiddenSlot> {
    let mut slots = Vec::new();
    for (column, pile) in state.tableau.iter().enumerate() {
        for (row, card) in pile.iter().enumerate() {
            if !card.is_face_up {
                slots.push(HiddenSlot::new(column as u8, row as u8));
            }
        }
    }
    slots
}

/// シャッフル済みプールを、元と同じ座席セットに配り直した盤面を作るよ。
///
/// 場札の裏向きスロットには同じ (列, 行) のまま別のカードが入り、
/// 残りは同じ枚数のまま山札になる。表向きカード・組札・捨て札は
/// クローンされるだけで一切変更しない！
fn rebuild_with_hidden_pool(
    state: &GameState,
    slots: &[HiddenSlot],
    pool: &[Card],
) -> GameState {
    let mut next = state.clone();
    let mut cards = pool.iter().copied();

    for slot in slots {
        if let Some(mut card) = cards.next() {
            card.is_face_up = false;
            next.tableau[slot.column as usize][slot.row as usize] = card;
        }
    }
    next.stock = cards
        .map(|mut card| {
            card.is_face_up = false;
            card
        })
        .collect();
    next
}
