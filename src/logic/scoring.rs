// src/logic/scoring.rs
//! ディール候補の採点ロジックだよ！💯
//!
//! シミュレータの「上がった枚数」だけで選ぶと、機械的に完璧で
//! いかにも仕込んだっぽい盤面ばかり選ばれちゃう。そこで
//! 「見た目の自然さ」を加点減点して、ほどよくバラけた盤面を選ぶんだ。

use itertools::Itertools;

use crate::components::game_state::GameState;
use crate::config::tuning::{
    ACE_SINGLE_BONUS, ACE_VISIBLE_BONUS, ALL_ACES_EXPOSED_PENALTY, SOLVED_COUNT_WEIGHT,
    TOP_RANK_VARIETY_BONUS,
};

/// 盤面の「見た目の自然さ」を採点するよ。
///
/// - 表向きのエースが 2〜3 枚: ちょうどいい！ボーナス 🎉
/// - 1枚: まあ自然。控えめボーナス
/// - 4枚全部: どう見ても仕込み。ペナルティ！🙅
/// - 場札トップのランクがバラけているほど加点
pub fn naturalness_score(state: &GameState) -> f32 {
    let mut score = match state.visible_ace_count() {
        2 | 3 => ACE_VISIBLE_BONUS,
        1 => ACE_SINGLE_BONUS,
        4 => ALL_ACES_EXPOSED_PENALTY,
        _ => 0.0,
    };

    // 場札トップ7枚のランクの種類数。全列同じランク、みたいな盤面は減点ぎみになる。
    let distinct_top_ranks = state
        .tableau
        .iter()
        .filter_map(|column| column.last())
        .filter(|card| card.is_face_up)
        .map(|card| card.rank)
        .unique()
        .count();
    score += distinct_top_ranks as f32 * TOP_RANK_VARIETY_BONUS;

    score
}

/// シミュレータの上がり枚数と自然さを合成した、候補選択用の複合スコア。
/// 大きいほど良い候補！
pub fn candidate_score(solved_count: u8, state: &GameState) -> f32 {
    solved_count as f32 * SOLVED_COUNT_WEIGHT + naturalness_score(state)
}
