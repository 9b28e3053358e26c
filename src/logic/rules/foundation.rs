//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};

/// 指定されたカードが、組札の山 (`pile`) の一番上に置けるかチェックする。
///
/// 組札ルールの本体。場札ルールと同じで、実装はここ一か所だけ！✨
///
/// # 引数
/// * `pile`: 移動先の組札の中身（下から上の順）。
/// * `card`: 置こうとしているカード。
///
/// # 戻り値
/// * 置けるなら `true`、そうでなければ `false`。
pub fn can_place_on_foundation(pile: &[Card], card: &Card) -> bool {
    match pile.last() {
        // --- 組札が空の場合 ---
        // 置けるのはエース (A) だけ！👑
        None => card.rank == Rank::Ace,
        // --- 組札にカードがある場合 ---
        // スートが同じで、ランクがちょうど1つ上である必要があるよ。
        // (例: トップが A なら、置けるのは同じスートの 2)
        Some(top) => card.suit == top.suit && card.rank.value() == top.rank.value() + 1,
    }
}
