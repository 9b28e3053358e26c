//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::Suit;

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
/// 場札 (Tableau) への移動ルール (色違い) で使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red, // ハートとダイヤは赤！♦️❤️
            Suit::Club | Suit::Spade => CardColor::Black,  // クラブとスペードは黒！♣️♠️
        }
    }
}

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Diamond ♦️, 2: Club ♣️, 3: Spade ♠️
/// 引数のインデックスが無効 (0-3以外) の場合は None を返すよ。
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    match foundation_index {
        0 => Some(Suit::Heart),
        1 => Some(Suit::Diamond),
        2 => Some(Suit::Club),
        3 => Some(Suit::Spade),
        _ => None,
    }
}

/// スートから組札のインデックス (0-3) を取得する。`get_foundation_suit` の逆！
pub fn foundation_index_for_suit(suit: Suit) -> u8 {
    match suit {
        Suit::Heart => 0,
        Suit::Diamond => 1,
        Suit::Club => 2,
        Suit::Spade => 3,
    }
}

/// 指定スートと反対色のスート2つを返すよ。
/// 「安全な組札移動」の判定で、反対色の組札の進み具合を見るのに使う！
pub fn opposite_color_suits(suit: Suit) -> [Suit; 2] {
    match CardColor::from_suit(suit) {
        CardColor::Red => [Suit::Club, Suit::Spade],
        CardColor::Black => [Suit::Heart, Suit::Diamond],
    }
}
