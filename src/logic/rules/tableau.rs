//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use super::common::CardColor;

/// 指定されたカードが、場札のトップカード (`target_top`) の上に置けるかチェックする。
///
/// これが場札ルールの本体！プレイヤーの操作も、自動プレイのシミュレーションも、
/// 全員この関数ひとつを見る。ルールの二重実装は絶対ダメ！🙅‍♀️
///
/// # 引数
/// * `target_top`: 移動先の列の一番上のカード。列が空なら `None`。
/// * `card`: 置こうとしているカード（複数枚の束なら、その一番下のカード）。
///
/// # 戻り値
/// * 置けるなら `true`、そうでなければ `false`。
pub fn can_place_on_tableau(target_top: Option<&Card>, card: &Card) -> bool {
    match target_top {
        Some(top) => {
            // **ルール1: 色が交互になっているか？** ❤️🖤
            let colors_different =
                CardColor::from_suit(card.suit) != CardColor::from_suit(top.suit);

            // **ルール2: ランクがちょうど1つ小さいか？** 📉
            // (例: 移動先が Q なら、置けるのは J だけ)
            let rank_is_one_less = card.rank.value() + 1 == top.rank.value();

            colors_different && rank_is_one_less
        }
        None => {
            // 列が空の場合、置けるのはキング (K) だけ！🤴
            card.rank == Rank::King
        }
    }
}

/// 列の末尾に連なっている表向きカードの枚数を数えるよ。
/// 「表向きの束をまとめて動かす」移動で、何枚までつかめるかの上限になる。
pub fn face_up_suffix_len(column: &[Card]) -> usize {
    column
        .iter()
        .rev()
        .take_while(|card| card.is_face_up)
        .count()
}
