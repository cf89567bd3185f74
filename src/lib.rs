//! 商品名称と条码の照合ツール
//!
//! 準備した表の商品名称ごとに商品明细表から候補を提示し、
//! 選択結果を Excel に出力する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod pipeline;
pub mod review;
pub mod telemetry;
