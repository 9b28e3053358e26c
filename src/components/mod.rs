// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
// 盤面を構成する値型たちが住んでる場所。整理整頓！🧹✨
pub mod card;       // カード本体 (Suit, Rank, Card)
pub mod stack;      // 山の種類 (StackType) と裏向きカードの座席 (HiddenSlot)
pub mod game_state; // 盤面まるごと (GameState, GameStatus)
