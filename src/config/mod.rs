// src/config/mod.rs

// 設定値のモジュールをまとめるよ！
pub mod tuning; // 生成・シミュレーション・救済の数値ノブたち 🎛️
