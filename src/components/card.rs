// src/components/card.rs

// serde を使う宣言！盤面のスナップショットを保存したい人向けに、
// カードも Serialize / Deserialize できるようにしておくよ。
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - Hash: HashSet で重複チェックする時に使えるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) ができるようにしてある。
/// ソリティアのルールはほとんど「ランクがちょうど1違い」の判定だからね！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J (11 扱い)
    Queen,   // Q (12 扱い)
    King,    // K (13 扱い)
}

impl Rank {
    /// ランクを数値 (1-13) として取り出すヘルパー。
    /// `rank as u8` を毎回書くより読みやすいからね！
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// 全スートを順番に並べた配列。デッキ生成やランク別の仕分けで使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランクを A から K まで並べた配列。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す値型だよ！🃏
///
/// 「ハート♥️のA、今は裏向き」みたいな情報を持つんだ。
/// スートとランクの組み合わせ (52種類) がカードの同一性で、
/// 作った後に変わっていいのは `is_face_up` と、どの山に属しているかだけ！
///
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `is_face_up`: カードが表向きか裏向きかを示すフラグ (trueなら表向き)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作るよ。デッキ生成はみんなここから！
    pub fn face_down(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表向きのカードを作るよ。テストや場札のトップで使う！
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    /// スートとランクの組。表裏を無視した「カードの正体」だね。
    pub fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}
