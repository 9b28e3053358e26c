// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! 「今どのカードが組札に上げられるか」「その移動は安全か」を判断するんだ。

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::rules::common::opposite_color_suits;
use crate::logic::rules::foundation::can_place_on_foundation;

/// その組札移動が「安全」かどうかを判定するよ。
///
/// 組札に欲張って積みすぎると、場札の整理に必要なカードまで
/// 上げてしまって手詰まりになることがあるんだ。😱
/// そこで昔ながらのヒューリスティック：
/// - ランクが 2 以下なら無条件で安全（A と 2 は場札で使い道がない）。
/// - それ以外は、反対色の組札2つのトップの低い方 + 2 以下なら安全。
///   （そのカードを場札で受け皿にしたい反対色のカードが、
///   もう組札に上がってしまっているなら手放しても困らない、という理屈！）
pub fn is_safe_foundation_move(state: &GameState, card: &Card) -> bool {
    let rank = card.rank.value();
    if rank <= 2 {
        return true;
    }
    let [a, b] = opposite_color_suits(card.suit);
    let opposite_min = state
        .foundation_top_rank(a)
        .min(state.foundation_top_rank(b));
    rank <= opposite_min + 2
}

/// 今の盤面で、組札に上げられるカードを持つ山を探すよ。
/// 見つかった場合は、その移動元の `StackType` を返す。
///
/// 探索順は決め打ち（場札の列0→6、最後に捨て札）。
/// 順番を固定しておくことで、シミュレーションが完全に決定的になる！🎯
///
/// # 引数
/// * `state`: 現在の盤面。
/// * `safe_only`: true なら `is_safe_foundation_move` を満たす移動だけを探す。
///
/// # 戻り値
/// * `Some(StackType)`: 移動元の山（`Tableau(i)` か `Waste`）。
/// * `None`: 上げられるカードが見つからなかった場合。
pub fn find_automatic_foundation_move(state: &GameState, safe_only: bool) -> Option<StackType> {
    // 場札の各列のトップをチェック
    for column in 0..state.tableau.len() {
        if let Some(card) = state.tableau_top(column) {
            if card.is_face_up && can_go_up(state, card, safe_only) {
                return Some(StackType::Tableau(column as u8));
            }
        }
    }
    // 捨て札のトップもチェック
    if let Some(card) = state.waste.last() {
        if can_go_up(state, card, safe_only) {
            return Some(StackType::Waste);
        }
    }
    None
}

/// カード1枚について「組札に置ける＆（必要なら）安全」をまとめてチェック。
fn can_go_up(state: &GameState, card: &Card, safe_only: bool) -> bool {
    can_place_on_foundation(state.foundation_pile(card.suit), card)
        && (!safe_only || is_safe_foundation_move(state, card))
}
