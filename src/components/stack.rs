// src/components/stack.rs

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Deserialize, Serialize};

/// カードが存在する場所の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
/// Clone, Copy: 値を簡単に複製できるようにする。
/// Debug: println! などで中身をデバッグ表示できるようにする。
/// PartialEq, Eq: == 演算子で比較できるようにする。
/// Serialize, Deserialize: 移動リクエストなどをそのまま保存・転送できるようにする！✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。スートごとに4つある。
    /// 番号 (0-3) で管理するよ。
    /// 0: Heart, 1: Diamond, 2: Club, 3: Spade の約束！
    Foundation(u8),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

/// 場札の中の「裏向きカードの座席」を指す小さな型だよ。📍
///
/// 救済処理 (rescue_system) が裏向きカードを並べ替えるとき、
/// 「どの列の下から何番目か」を覚えておく必要があるんだ。
/// column が列番号 (0-6)、row がその列の下から数えた位置 (0 が一番下)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenSlot {
    pub column: u8,
    pub row: u8,
}

impl HiddenSlot {
    /// 新しい HiddenSlot を作成するヘルパー関数。
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}
