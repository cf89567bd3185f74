//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 入力データが照合に使えない（列不足・空の明細表など）
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 候補リストに対する選択が存在しない
    #[error("Missing selection for row {0}")]
    MissingSelection(usize),

    /// 提示されていない候補を選択した
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
