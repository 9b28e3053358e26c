// src/logic/mod.rs

// 純粋なゲームロジックのモジュールをまとめるよ！
// ここの関数はどれも盤面を受け取って値を返すだけ。隠れた状態はなし！✨
pub mod auto_move;   // 組札への自動移動と「安全な移動」判定 🪄
pub mod deck;        // 52枚デッキの生成とシャッフル 🃏
pub mod rules;       // 配置ルールと移動の妥当性チェック ✅
pub mod scoring;     // ディール候補の自然さ採点 💯
pub mod solvability; // 貪欲オートプレイによる解けそう度の見積もり 🤖
