// src/components/game_state.rs

// serde を使う宣言！ゲーム状態の保存は呼び出し側の仕事だけど、
// そのために盤面まるごと Serialize / Deserialize できるようにしておくんだ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::logic::rules::common::foundation_index_for_suit;

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// ゲームがまだプレイ中なのか、それとも全カードを組札に上げて勝ったのか、
/// みたいな状況を示すのに使うよ！🏆🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 52枚すべてが組札に上がった状態
    Won,
}

/// 盤面まるごとを持つ集約型だよ！🃏🌍
///
/// クロンダイクの4種類の山を全部所有してる：
/// - `tableau`: 場札7列。各 Vec の先頭 (index 0) が一番下、末尾が一番上。
/// - `foundations`: 組札4つ。インデックスの約束は
///   0: Heart ❤️, 1: Diamond ♦️, 2: Club ♣️, 3: Spade ♠️。
/// - `stock`: 山札。末尾が「次に引かれる」トップ。全部裏向き。
/// - `waste`: 捨て札。末尾がトップ。全部表向き。
///
/// 大事な不変条件：4つの山を全部合わせると、ちょうど52枚のデッキに
/// なること！カードが消えたり増えたりしたら、それはバグ！🙅‍♀️
/// （`is_full_deck` でいつでも監査できるようにしてある）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tableau: [Vec<Card>; 7],
    pub foundations: [Vec<Card>; 4],
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub status: GameStatus,
    /// 適用された移動の回数（draw も含む）。
    pub move_count: u32,
    /// 捨て札を山札に戻した回数。
    pub recycle_count: u32,
}

impl GameState {
    /// 空っぽの盤面を作るよ。ディールシステムがここにカードを配っていく！
    pub fn new_empty() -> Self {
        Self {
            tableau: std::array::from_fn(|_| Vec::new()),
            foundations: std::array::from_fn(|_| Vec::new()),
            stock: Vec::new(),
            waste: Vec::new(),
            status: GameStatus::Playing,
            move_count: 0,
            recycle_count: 0,
        }
    }

    /// 今、組札に上がっているカードの合計枚数 (0-52)。
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(|pile| pile.len()).sum()
    }

    /// プレイヤーがまだ見ていないカードの枚数。
    /// 場札の裏向きカードと、山札の全部がこれに当たるよ。
    /// （捨て札は一度表で見えたカードだから数えない！）
    pub fn hidden_card_count(&self) -> usize {
        let face_down_in_tableau: usize = self
            .tableau
            .iter()
            .map(|column| column.iter().filter(|card| !card.is_face_up).count())
            .sum();
        face_down_in_tableau + self.stock.len()
    }

    /// 指定した列の一番上のカード。列が空なら None。
    pub fn tableau_top(&self, column: usize) -> Option<&Card> {
        self.tableau.get(column).and_then(|pile| pile.last())
    }

    /// 指定スートの組札の山への参照。
    pub fn foundation_pile(&self, suit: Suit) -> &Vec<Card> {
        &self.foundations[foundation_index_for_suit(suit) as usize]
    }

    /// 指定スートの組札のトップのランク値 (1-13)。空なら 0。
    /// 「安全な組札移動」の判定でしょっちゅう使うよ。
    pub fn foundation_top_rank(&self, suit: Suit) -> u8 {
        self.foundation_pile(suit)
            .last()
            .map_or(0, |card| card.rank.value())
    }

    /// 場札で表向きになっているエースの枚数。
    /// 配り直しの「見た目の自然さ」採点で使うんだ。
    pub fn visible_ace_count(&self) -> usize {
        self.tableau
            .iter()
            .flat_map(|column| column.iter())
            .filter(|card| card.is_face_up && card.rank == Rank::Ace)
            .count()
    }

    /// 指定した列のトップが裏向きだったら表にめくるよ。
    /// カードを移動させて下のカードが露出した時に呼ぶ！👀
    /// めくった場合は true を返す。
    pub fn flip_exposed_card(&mut self, column: usize) -> bool {
        if let Some(card) = self.tableau[column].last_mut() {
            if !card.is_face_up {
                card.is_face_up = true;
                return true;
            }
        }
        false
    }

    /// 4つの山の全カードをひとつのイテレータで回すよ。監査用！
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.tableau
            .iter()
            .flat_map(|pile| pile.iter())
            .chain(self.foundations.iter().flat_map(|pile| pile.iter()))
            .chain(self.stock.iter())
            .chain(self.waste.iter())
    }

    /// 盤面がちょうど52枚のデッキ（重複なし・欠けなし）かチェックする。
    /// テストやデバッグで呼ぶ監査関数だよ。🧐
    pub fn is_full_deck(&self) -> bool {
        use std::collections::HashSet;
        let mut seen = HashSet::with_capacity(52);
        let mut total = 0usize;
        for card in self.all_cards() {
            total += 1;
            if !seen.insert(card.identity()) {
                return false; // 重複発見！
            }
        }
        total == 52
    }

    /// ゲームに勝った状態か？
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{ALL_RANKS, ALL_SUITS};

    /// テスト用：52枚全部を山札に積んだだけの盤面を作るヘルパー。
    fn state_with_everything_in_stock() -> GameState {
        let mut state = GameState::new_empty();
        for &suit in ALL_SUITS.iter() {
            for &rank in ALL_RANKS.iter() {
                state.stock.push(Card::face_down(suit, rank));
            }
        }
        state
    }

    #[test]
    fn empty_state_is_not_a_full_deck() {
        let state = GameState::new_empty();
        assert_eq!(state.foundation_card_count(), 0);
        assert_eq!(state.hidden_card_count(), 0);
        assert!(!state.is_full_deck(), "空っぽの盤面が52枚扱いになってる！");
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn full_stock_is_a_full_deck() {
        let state = state_with_everything_in_stock();
        assert!(state.is_full_deck(), "52枚積んだのに監査に落ちた！");
        assert_eq!(state.hidden_card_count(), 52);
    }

    #[test]
    fn duplicate_card_fails_the_audit() {
        let mut state = state_with_everything_in_stock();
        // わざと1枚すり替えて重複を作る
        state.stock[0] = state.stock[1];
        assert!(!state.is_full_deck(), "重複があるのに監査を通ってしまった！");
    }

    #[test]
    fn foundation_top_rank_works() {
        let mut state = GameState::new_empty();
        assert_eq!(state.foundation_top_rank(Suit::Heart), 0, "空の組札は 0 のはず");

        state.foundations[0].push(Card::face_up(Suit::Heart, Rank::Ace));
        state.foundations[0].push(Card::face_up(Suit::Heart, Rank::Two));
        assert_eq!(state.foundation_top_rank(Suit::Heart), 2);
        assert_eq!(state.foundation_card_count(), 2);
    }

    #[test]
    fn flip_exposed_card_only_flips_face_down_tops() {
        let mut state = GameState::new_empty();
        state.tableau[3].push(Card::face_down(Suit::Club, Rank::Nine));

        assert!(state.flip_exposed_card(3), "裏向きのトップはめくれるはず");
        assert!(state.tableau[3][0].is_face_up);
        // もう表向きだから、二度目は何も起きない
        assert!(!state.flip_exposed_card(3));

        println!("flip_exposed_card テスト、成功！🎉");
    }

    #[test]
    fn visible_aces_are_counted() {
        let mut state = GameState::new_empty();
        state.tableau[0].push(Card::face_up(Suit::Heart, Rank::Ace));
        state.tableau[1].push(Card::face_down(Suit::Spade, Rank::Ace)); // 裏向きは数えない
        state.tableau[2].push(Card::face_up(Suit::Diamond, Rank::King));
        assert_eq!(state.visible_ace_count(), 1);
    }

    #[test]
    fn game_state_round_trips_through_json() {
        // 保存は呼び出し側の仕事だけど、Serialize できることだけは保証しておく！
        let state = state_with_everything_in_stock();
        let json = serde_json::to_string(&state).expect("盤面を JSON にできるはず");
        let back: GameState = serde_json::from_str(&json).expect("JSON から戻せるはず");
        assert_eq!(state, back, "JSON を経由したら盤面が変わってしまった！");
    }
}
