// src/config/tuning.rs
//! 生成・シミュレーション・救済のチューニング定数を定義するよ！
//! しきい値や試行回数は全部ここ。数字をいじって遊ぶならこのファイル！🎛️

// --- シミュレータ (logic/solvability.rs) の打ち切り上限 ---

/// 厳格モードの最大手数。初回ゲームは完走 (52枚) を要求するので多めに回す。
pub const STRICT_MAX_MOVES: u32 = 3000;
/// 厳格モードで捨て札を山札に戻していい回数。
pub const STRICT_MAX_RECYCLES: u32 = 8;
/// 厳格モードの「進展なし」連続カウントの上限。
/// 山札+捨て札は最大25枚なので、これを超えて空振りが続いたら
/// 1周まるごと何も起きなかったことが確定する。
pub const STRICT_MAX_STALLED: u32 = 40;

/// 柔軟モードの最大手数。通常の配り直しと救済処理はこっちを使う。
pub const FLEXIBLE_MAX_MOVES: u32 = 800;
/// 柔軟モードのリサイクル上限。
pub const FLEXIBLE_MAX_RECYCLES: u32 = 4;
/// 柔軟モードの「進展なし」連続カウントの上限。
pub const FLEXIBLE_MAX_STALLED: u32 = 30;

// --- 受け入れしきい値（52枚中、何枚上がれば合格か） ---

/// 厳格モードの合格ライン。全部！
pub const STRICT_ACCEPT_COUNT: u8 = 52;
/// 柔軟モードの合格ライン (52枚の約88%)。
/// 完全クリア保証より「自然に見える多様な盤面」を優先するトレードオフだよ。
pub const FLEXIBLE_ACCEPT_COUNT: u8 = 46;

// --- ディール生成 (systems/deal_system.rs) ---

/// 偏り付き生成の試行回数（厳格モード）。
pub const STRICT_DEAL_ATTEMPTS: u32 = 400;
/// 偏り付き生成の試行回数（柔軟モード）。
pub const FLEXIBLE_DEAL_ATTEMPTS: u32 = 160;
/// 偏りなし生成（フォールバック1段目）の試行回数。
pub const BASIC_DEAL_ATTEMPTS: u32 = 80;
/// フォールバック1段目の合格ライン。本線よりゆるめ。
pub const FALLBACK_ACCEPT_COUNT: u8 = 44;
/// この複合スコアを超えた候補が出たら、試行を打ち切って即採用！
pub const DEAL_EARLY_STOP_SCORE: f32 = 60.0;

/// 表向きに種まきするエースの枚数の重み (1枚 / 2枚 / 3枚)。
/// 4枚全部表にすると「仕込んだ感」が出ちゃうので絶対にやらない！
pub const ACE_SEED_WEIGHTS: [u32; 3] = [40, 45, 15];
/// 表向きに種まきする2の枚数の範囲。
pub const TWO_SEED_MIN: usize = 2;
pub const TWO_SEED_MAX: usize = 3;
/// 表向きに種まきする3の枚数の範囲。
pub const THREE_SEED_MIN: usize = 1;
pub const THREE_SEED_MAX: usize = 2;

/// 山札の「低ランクを先に引かせる」バイアスのパス回数。
/// 完全にソートすると不自然だから、確率付きの隣接スワップを数周だけ！
pub const STOCK_BIAS_PASSES: u32 = 2;
/// 1回の隣接スワップが実際に起きる確率。
pub const STOCK_BIAS_SWAP_PROBABILITY: f64 = 0.35;

// --- 採点 (logic/scoring.rs) ---

/// 複合スコアにおける「上がった枚数」1枚あたりの重み。
pub const SOLVED_COUNT_WEIGHT: f32 = 1.0;
/// 表向きエースが2〜3枚のときのボーナス。
pub const ACE_VISIBLE_BONUS: f32 = 6.0;
/// 表向きエースが1枚のときの控えめなボーナス。
pub const ACE_SINGLE_BONUS: f32 = 3.0;
/// エースが4枚全部見えているときのペナルティ。露骨すぎ！🙅
pub const ALL_ACES_EXPOSED_PENALTY: f32 = -8.0;
/// 場札トップのランクの種類数 1種類あたりのボーナス。
pub const TOP_RANK_VARIETY_BONUS: f32 = 0.8;

// --- 救済処理 (systems/rescue_system.rs) ---

/// 救済と救済の間に最低限あけるミリ秒。コスト暴走のガード！
pub const RESCUE_COOLDOWN_MS: u64 = 10_000;
/// 裏向きカードがこれ未満なら並べ替える意味がないのでスキップ。
pub const RESCUE_MIN_HIDDEN_CARDS: usize = 4;
/// 裏向きプールのシャッフル試行回数。
pub const RESCUE_ATTEMPTS: u32 = 48;
/// 現状の盤面がこのライン以上なら救済は何もしない。
pub const RESCUE_ACCEPT_COUNT: u8 = 44;
/// 探索中にこのラインを超える候補が出たら早期終了。
pub const RESCUE_TARGET_COUNT: u8 = 48;
