// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use rand::seq::SliceRandom;
use rand::Rng;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// 返り値は `Vec<Card>` で、カードはスートとランクの組み合わせで全種類作られるよ。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52); // 52枚入る容量を確保しておくと効率的！

    // 定義しておいた ALL_SUITS と ALL_RANKS を使ってループ！
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::face_down(suit, rank));
        }
    }
    deck // 完成したデッキを返す！
}

/// カードデッキをシャッフルする関数だよ。
///
/// 乱数生成器は呼び出し側から渡してもらう方式！
/// こうしておくと、シードを固定すれば同じシャッフル結果を再現できるから、
/// テストもディール生成のやり直しも決定的にできるんだ。🎲
///
/// # 引数
/// * `deck` - シャッフルしたいカードデッキ (`Vec<Card>`) への可変参照。
/// * `rng` - 乱数生成器への可変参照。
pub fn shuffle_deck(deck: &mut Vec<Card>, rng: &mut impl Rng) {
    deck.shuffle(rng);
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！ (ちょっと大変だけど大事！)
        use std::collections::HashSet;
        let mut unique_cards = HashSet::with_capacity(52);
        for card in &deck {
            // HashSet の insert メソッドは、要素が既に追加されていたら false を返すよ！
            assert!(
                unique_cards.insert(card.identity()),
                "デッキに重複したカードが見つかりました！ {:?}",
                card
            );
        }

        // 3. すべてのカードが裏向きかチェック！
        let all_face_down = deck.iter().all(|card| !card.is_face_up);
        assert!(all_face_down, "デッキに表向きのカードが含まれています！");

        println!("create_standard_deck 関数のテスト、成功！🎉");
    }

    #[test]
    fn test_shuffle_deck_changes_order() {
        let initial_deck = create_standard_deck();
        let mut shuffled_deck = initial_deck.clone(); // コピーしてシャッフルする
        let mut rng = StdRng::seed_from_u64(12345);
        shuffle_deck(&mut shuffled_deck, &mut rng);

        // シャッフルしたら元の順番とは (ほぼ確実に) 変わるはず
        assert_ne!(initial_deck, shuffled_deck, "シャッフルしても順番が変わってない (稀に起こりうる)");
        // サイズは変わらないはず
        assert_eq!(initial_deck.len(), shuffled_deck.len(), "シャッフルでカード数が変わった！");
    }

    #[test]
    fn test_shuffle_is_reproducible_with_same_seed() {
        // 同じシードなら同じ並びになるはず。これが乱数注入のうれしいところ！✨
        let mut deck_a = create_standard_deck();
        let mut deck_b = create_standard_deck();

        let mut rng_a = StdRng::seed_from_u64(777);
        let mut rng_b = StdRng::seed_from_u64(777);
        shuffle_deck(&mut deck_a, &mut rng_a);
        shuffle_deck(&mut deck_b, &mut rng_b);

        assert_eq!(deck_a, deck_b, "同じシードなのにシャッフル結果が違う！");
    }
}
