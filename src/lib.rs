// src/lib.rs

//! クロンダイク・ソリティアの「配る・検証する・立て直す」コアだよ！🃏✨
//!
//! このクレートがやること：
//! - **ディール生成**: 解ける可能性が高くて、でも仕込みっぽく見えない初期盤面を探す。
//! - **移動の検証と適用**: ルールに合う移動だけを盤面に反映する。
//! - **解けそう度のシミュレーション**: 貪欲オートプレイで盤面を採点する。
//! - **ランタイム救済**: プレイ中に詰みかけた盤面の裏向きカードをこっそり並べ替える。
//!
//! やらないこと：描画・アニメーション・入力・保存はぜんぶ呼び出し側の世界！
//! このクレートは盤面 (`GameState`) を受け取って、盤面か判定値を返すだけ。
//! スレッドも非同期も使わない、ただの同期関数の集まりだよ。
//!
//! 乱数が絡む関数は全部 `rng: &mut impl Rng` を引数で受け取る方式。
//! シードを固定すれば、配りも救済も完全に再現できる！🎲

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // 盤面を構成する値型 (Card, GameState, ...)
pub mod config;     // チューニング定数
pub mod logic;      // 純粋なゲームロジック (ルール、シミュレータ、採点)
pub mod systems;    // 盤面を作る・動かす・救済するシステム

// 外から使う型と関数をルートに再エクスポート！
// `klondike_logic::generate_deal(...)` みたいに短く呼べるようにするためだよ。
pub use components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use components::game_state::{GameState, GameStatus};
pub use components::stack::StackType;
pub use logic::rules::move_validation::{GameMove, MoveRejected};
pub use logic::solvability::{simulate_solvability, SimulationMode};
pub use systems::deal_system::{generate_deal, DealMode};
pub use systems::move_card_system::apply_move;
pub use systems::rescue_system::{ensure_solvability, TimestampMs};

// --- クレート境界をまたいだ統合テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// 「配って、引いて、動かして」を通しでやっても52枚が保存されるかの確認。
    /// どのモジュールか単体ではなく、組み合わせた時の保証がほしいからね！
    #[test]
    fn full_session_conserves_all_52_cards() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut state = generate_deal(DealMode::Solvable, &mut rng);
        assert!(state.is_full_deck());

        // 雑に50手プレイしてみる。引けるだけ引いて、上げられるなら上げる！
        for _ in 0..50 {
            let mut moved = false;
            // 各列のトップを組札へ試す
            for column in 0..7u8 {
                if let Some(card) = state.tableau_top(column as usize) {
                    let game_move = GameMove::MoveToFoundation {
                        from: StackType::Tableau(column),
                        suit: card.suit,
                    };
                    if let Ok(next) = apply_move(&state, game_move) {
                        state = next;
                        moved = true;
                        break;
                    }
                }
            }
            if !moved {
                if let Ok(next) = apply_move(&state, GameMove::DrawStock) {
                    state = next;
                }
            }
            assert!(state.is_full_deck(), "プレイ中にカードが消えたか増えた！");
        }
    }

    /// 救済を挟んでも、シミュレーションの見積もりが悪化しないことの通し確認。
    #[test]
    fn rescue_after_moves_never_regresses() {
        let mut rng = StdRng::seed_from_u64(4096);
        let mut state = generate_deal(DealMode::Random, &mut rng);

        // 何枚かめくって、盤面を進めてから救済を呼ぶ
        for _ in 0..10 {
            if let Ok(next) = apply_move(&state, GameMove::DrawStock) {
                state = next;
            }
        }

        let before = simulate_solvability(&state, SimulationMode::Flexible);
        let (rescued, _ts) = ensure_solvability(&state, 1_000_000, 0, &mut rng);
        let after = simulate_solvability(&rescued, SimulationMode::Flexible);

        assert!(after >= before, "救済で {} -> {} に悪化した！", before, after);
        assert!(rescued.is_full_deck());
    }

    /// 公開APIの顔ぶれがちゃんとルートから使えるかのスモークテスト。
    #[test]
    fn public_api_smoke_test() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = generate_deal(DealMode::Random, &mut rng);
        let solved = simulate_solvability(&state, SimulationMode::Flexible);
        assert!(solved <= 52);

        let rejected = apply_move(
            &state,
            GameMove::MoveToTableau { from: StackType::Stock, to: 0, count: 1 },
        );
        assert_eq!(rejected, Err(MoveRejected::InvalidSource(StackType::Stock)));
    }
}
