//! 出力の共通部分（CLIとテストで共有）

#[cfg(feature = "excel")]
pub mod excel_core;
