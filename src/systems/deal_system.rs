// src/systems/deal_system.rs

// === 使うものを宣言するよ！ ===
// 盤面 (GameState)、カード、デッキ操作、シミュレータ、採点。
// ディール生成はこのクレートの主役なので、登場人物が多い！🎬
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameState;
use crate::config::tuning::{
    ACE_SEED_WEIGHTS, BASIC_DEAL_ATTEMPTS, DEAL_EARLY_STOP_SCORE, FALLBACK_ACCEPT_COUNT,
    FLEXIBLE_DEAL_ATTEMPTS, STOCK_BIAS_PASSES, STOCK_BIAS_SWAP_PROBABILITY,
    STRICT_DEAL_ATTEMPTS, THREE_SEED_MAX, THREE_SEED_MIN, TWO_SEED_MAX, TWO_SEED_MIN,
};
use crate::logic::deck::{create_standard_deck, shuffle_deck};
use crate::logic::scoring::candidate_score;
use crate::logic::solvability::{simulate_solvability, SimulationMode};

/// どんな配り方をするかのモードだよ。
///
/// - `SolvableStrict`: セッションの一番最初のゲーム用。シミュレータが
///   52枚完走できる盤面だけを合格にする、いちばん厳しい配り方。
/// - `Solvable`: 普段の配り直し用。だいたい解ければOKにして、
///   盤面の見た目の多様さを優先する。
/// - `Unsolvable`: 練習（絶対クリアできない）モード用。エースを全部
///   高いカードの下に封印する、意地悪な配り方！😈
/// - `Random`: 何のバイアスもかけない、ただのシャッフル配り。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealMode {
    SolvableStrict,
    Solvable,
    Unsolvable,
    Random,
}

/// 52枚のデッキを配って、新しいゲームの盤面を作るよ！🎉
///
/// どのモードでも、返ってくる盤面は必ず「列のサイズが1..7、各列のトップ
/// だけ表向き、残り24枚が山札」の正しいクロンダイク初期形。
/// 絶対に失敗しない（エラーを返さない）のがこの関数の約束！
/// 解ける盤面が見つからなかったときは、段階的にあきらめて
/// 最後はただのランダム配りを返すよ。
pub fn generate_deal(mode: DealMode, rng: &mut impl Rng) -> GameState {
    match mode {
        DealMode::SolvableStrict => search_solvable_deal(SimulationMode::Strict, rng),
        DealMode::Solvable => search_solvable_deal(SimulationMode::Flexible, rng),
        DealMode::Unsolvable => build_buried_deal(rng),
        DealMode::Random => {
            let mut deck = create_standard_deck();
            shuffle_deck(&mut deck, rng);
            deal_from_deck(deck)
        }
    }
}

/// シャッフル済みデッキを、クロンダイクの初期配置どおりに並べるよ。
///
/// # 処理の流れ
/// 1. 場札 (Tableau): 7列。1列目は1枚、2列目は2枚、... 7列目は7枚。
///    各列の一番上のカードだけ表向きにする！👀
/// 2. 残ったカードは全部、山札 (Stock) に裏向きのまま積む。
fn deal_from_deck(deck: Vec<Card>) -> GameState {
    let mut state = GameState::new_empty();
    let mut cards = deck.into_iter();

    for column in 0..7 {
        for row in 0..=column {
            if let Some(mut card) = cards.next() {
                card.is_face_up = row == column; // その列の一番上だけ表向き！
                state.tableau[column].push(card);
            }
        }
    }
    // 残り (52枚デッキなら24枚) は山札へ。もともと裏向きのままだよ。
    state.stock.extend(cards);
    state
}

// === 解ける盤面の探索 ===

/// バイアス付き候補を量産して、シミュレータと採点で一番いいやつを選ぶよ。
///
/// 合格候補が見つからなかったときのフォールバック連鎖：
/// 1. バイアスなしの普通のシャッフル配りを試す（こっちもシミュレータで検査）。
/// 2. それでもダメなら、検査なしの完全ランダム配り。
///    （これは想定内の最終degradation。エラーじゃない！）
fn search_solvable_deal(sim_mode: SimulationMode, rng: &mut impl Rng) -> GameState {
    let attempts = match sim_mode {
        SimulationMode::Strict => STRICT_DEAL_ATTEMPTS,
        SimulationMode::Flexible => FLEXIBLE_DEAL_ATTEMPTS,
    };
    let threshold = sim_mode.acceptance_threshold();

    // (複合スコア, 上がり枚数, 盤面) の最良記録。タイなら先に見つけた方を残す！
    let mut best: Option<(f32, u8, GameState)> = None;

    for attempt in 0..attempts {
        let candidate = build_biased_candidate(rng);
        let solved = simulate_solvability(&candidate, sim_mode);
        let score = candidate_score(solved, &candidate);

        let is_better = best
            .as_ref()
            .map_or(true, |(best_score, _, _)| score > *best_score);
        if is_better {
            debug!(
                "deal attempt {}: solved={} score={:.1} (new best)",
                attempt, solved, score
            );
            best = Some((score, solved, candidate));
        }

        // 十分いい候補が出たら、残りの試行はもったいないので打ち切り！
        if let Some((best_score, best_solved, _)) = &best {
            if *best_solved >= threshold && *best_score >= DEAL_EARLY_STOP_SCORE {
                info!(
                    "deal search stopped early at attempt {} (solved={}, score={:.1})",
                    attempt, best_solved, best_score
                );
                break;
            }
        }
    }

    if let Some((_, solved, state)) = best {
        if solved >= threshold {
            return state;
        }
        info!(
            "biased search best was {}/{} required, falling back",
            solved, threshold
        );
    }

    // --- フォールバック1: バイアスなし、でも検査はする ---
    warn!("biased deal search exhausted its budget, trying the basic generator");
    for _ in 0..BASIC_DEAL_ATTEMPTS {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, rng);
        let candidate = deal_from_deck(deck);
        if simulate_solvability(&candidate, SimulationMode::Flexible) >= FALLBACK_ACCEPT_COUNT {
            return candidate;
        }
    }

    // --- フォールバック2: 完全ランダム。最後の手段！ ---
    warn!("basic generator also failed, dealing a fully random board");
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);
    deal_from_deck(deck)
}

/// 「解けやすくて、でも仕込んだように見えない」候補盤面を1つ作るよ。
///
/// # 処理の流れ
/// 1. デッキをランク帯（A / 2 / 3 / 4-6 / それ以外）に仕分けする。
/// 2. 表向きトップに種まきする枚数を決める：エース1〜3枚（全部はダメ！）、
///    2を2〜3枚、3を1〜2枚。
/// 3. 種まきカードをランダムな列のトップに割り当てる。
/// 4. 残りをシャッフルして裏向きスロットと残りのトップを埋める。
/// 5. 余った24枚は山札へ。低いランクほど先に引けるように、
///    確率つきの隣接スワップで軽く偏らせる（完全ソートはしない！）。
fn build_biased_candidate(rng: &mut impl Rng) -> GameState {
    // --- 1. ランク帯で仕分け ---
    let mut aces = Vec::new();
    let mut twos = Vec::new();
    let mut threes = Vec::new();
    let mut others = Vec::new();
    for card in create_standard_deck() {
        match card.rank {
            Rank::Ace => aces.push(card),
            Rank::Two => twos.push(card),
            Rank::Three => threes.push(card),
            _ => others.push(card),
        }
    }
    aces.shuffle(rng);
    twos.shuffle(rng);
    threes.shuffle(rng);
    others.shuffle(rng);

    // --- 2. 表向き種まきプール ---
    let ace_count = weighted_ace_seed_count(rng);
    let two_count = rng.gen_range(TWO_SEED_MIN..=TWO_SEED_MAX);
    let three_count = rng.gen_range(THREE_SEED_MIN..=THREE_SEED_MAX);

    let mut face_up_pool: Vec<Card> = Vec::new();
    face_up_pool.extend(aces.drain(..ace_count));
    face_up_pool.extend(twos.drain(..two_count));
    face_up_pool.extend(threes.drain(..three_count));
    face_up_pool.shuffle(rng);

    // --- 裏向きプール: 種まきされなかった全カード ---
    let mut hidden_pool: Vec<Card> = aces
        .into_iter()
        .chain(twos)
        .chain(threes)
        .chain(others)
        .collect();
    hidden_pool.shuffle(rng);

    // トップは7枚しかないので、あふれた種まきカードは裏向きプールへ戻す。
    while face_up_pool.len() > 7 {
        if let Some(card) = face_up_pool.pop() {
            hidden_pool.push(card);
        }
    }

    // --- 3. 種まきカードを置く列を決める ---
    let mut columns: Vec<usize> = (0..7).collect();
    columns.shuffle(rng);
    let mut top_for_column: [Option<Card>; 7] = [None; 7];
    for (column, card) in columns.into_iter().zip(face_up_pool) {
        top_for_column[column] = Some(card);
    }

    // --- 4. 列を組み立てる ---
    let mut state = GameState::new_empty();
    let mut hidden = hidden_pool.into_iter();
    for column in 0..7 {
        // 裏向きカードを先に積む (列番号と同じ枚数)
        for _row in 0..column {
            if let Some(card) = hidden.next() {
                state.tableau[column].push(card);
            }
        }
        // トップ: 種まきカードがあればそれ、なければプールから
        let top = top_for_column[column].take().or_else(|| hidden.next());
        if let Some(mut top) = top {
            top.is_face_up = true;
            state.tableau[column].push(top);
        }
    }

    // --- 5. 残りは山札。低ランクを引きやすい側に寄せる ---
    let mut stock: Vec<Card> = hidden.collect();
    bias_stock_low_ranks_first(&mut stock, rng);
    state.stock = stock;
    state
}

/// 表向きに種まきするエースの枚数 (1〜3) を重み付きで決めるよ。
/// 4枚全部を表にすることは絶対にない！
fn weighted_ace_seed_count(rng: &mut impl Rng) -> usize {
    let total: u32 = ACE_SEED_WEIGHTS.iter().sum();
    let mut roll = rng.gen_range(0..total);
    for (index, &weight) in ACE_SEED_WEIGHTS.iter().enumerate() {
        if roll < weight {
            return index + 1;
        }
        roll -= weight;
    }
    ACE_SEED_WEIGHTS.len() // ここには来ないけど、念のため
}

/// 山札の並びに「低いランクほど先に引ける」偏りを入れるよ。
///
/// 山札は末尾から引かれるので、低ランクを末尾方向へバブルさせる。
/// ただし確率つき＆数パスだけ。完全にソートされた山札は、引いた瞬間に
/// プレイヤーにバレちゃうからね！😅
fn bias_stock_low_ranks_first(stock: &mut [Card], rng: &mut impl Rng) {
    if stock.len() < 2 {
        return;
    }
    for _pass in 0..STOCK_BIAS_PASSES {
        for i in 0..stock.len() - 1 {
            if stock[i].rank < stock[i + 1].rank && rng.gen_bool(STOCK_BIAS_SWAP_PROBABILITY) {
                stock.swap(i, i + 1);
            }
        }
    }
}

// === 絶対に解けない盤面 ===

/// エースを完全に封印した「絶対クリア不可能」な盤面を組み立てるよ。😈
///
/// 仕掛けはこう：
/// - 4枚のエースは、深い列 (4〜7列目) の一番底に裏向きで置く。
/// - その真上には必ずキングを裏向きで置く。キングは空列にしか動かせず、
///   このレイアウトでは空列が絶対にできないので、一度めくれても
///   その場から永久に動けない＝下のエースは永久に出てこない！
/// - 7列のトップは全部黒の高ランクカード。黒の上に黒は置けないから、
///   初手から場札同士の移動はどこにもない。
/// - 残った2は山札の引かれにくい側へ沈めておく。
///
/// エースが1枚も出てこない以上、組札には何も積めない。
/// シミュレータの上がり枚数はきっかり0枚になるよ。
fn build_buried_deal(rng: &mut impl Rng) -> GameState {
    let deck = create_standard_deck();

    // 役者を仕分けする
    let mut aces = Vec::new(); // 封印対象 👑
    let mut kings = Vec::new(); // 蓋 (直接エースの上に乗せる)
    let mut black_tops = Vec::new(); // 表向きトップ要員 (黒の高ランク)
    let mut twos = Vec::new(); // 山札の奥に沈める
    let mut fillers = Vec::new(); // その他の詰め物

    for card in deck {
        match (card.suit, card.rank) {
            (_, Rank::Ace) => aces.push(card),
            (_, Rank::King) => kings.push(card),
            (Suit::Spade | Suit::Club, Rank::Queen | Rank::Jack | Rank::Ten) => {
                black_tops.push(card)
            }
            (_, Rank::Two) => twos.push(card),
            _ => fillers.push(card),
        }
    }
    fillers.shuffle(rng);
    black_tops.shuffle(rng);

    // 黒の Q/J/10 は6枚あるけどトップは7枚必要。
    // 7枚目は黒の9を詰め物から拝借する（黒同士なら何でも蓋として成立）。
    if let Some(position) = fillers
        .iter()
        .position(|card| card.rank == Rank::Nine && matches!(card.suit, Suit::Spade | Suit::Club))
    {
        black_tops.push(fillers.remove(position));
    }

    let mut state = GameState::new_empty();
    let mut fill = fillers.into_iter();

    for column in 0..7 {
        let depth = column + 1;
        // 深い4列 (3〜6列目) の底にエース、その真上にキング
        if column >= 3 {
            if let (Some(ace), Some(king)) = (aces.pop(), kings.pop()) {
                state.tableau[column].push(ace);
                state.tableau[column].push(king);
            }
        }
        // トップの1枚分を残して、詰め物で埋める
        while state.tableau[column].len() < depth - 1 {
            if let Some(card) = fill.next() {
                state.tableau[column].push(card);
            }
        }
        // トップは黒の高ランクを表向きで！
        if let Some(mut top) = black_tops.pop() {
            top.is_face_up = true;
            state.tableau[column].push(top);
        }
    }

    // 山札: 2の4枚を「引かれにくい側」(先頭) に置いて、残りを上に積む。
    // 引くときは末尾から取るので、先頭は一番最後にしか出てこないんだ。
    state.stock.extend(twos);
    state.stock.extend(fill);
    state
}
