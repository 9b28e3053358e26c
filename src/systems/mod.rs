// src/systems/mod.rs

// 盤面まるごとを相手にする「システム」たちを宣言するよ！
pub mod deal_system;      // 新しいゲームを配る 🎲
pub mod move_card_system; // 検証つきの移動適用 🖱️
pub mod rescue_system;    // 解けなくなった盤面の救済 🛟
