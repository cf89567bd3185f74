use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarcodeMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    /// 入力表がまだ指定されていない（処理は待機し、指定を促す）
    #[error("入力ファイルが指定されていません: {0}")]
    MissingInput(String),

    /// 自動検出対象の商品明细表が存在しない
    #[error("商品明细表が見つかりません: {0}")]
    MissingLocalResource(String),

    #[error("入力データが不正: {0}")]
    InvalidInput(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("表の読み込みエラー: {0}")]
    SpreadsheetRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力プロンプトエラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(barcode_match_common::Error),
}

impl From<barcode_match_common::Error> for BarcodeMatchError {
    fn from(e: barcode_match_common::Error) -> Self {
        match e {
            barcode_match_common::Error::InvalidInput(msg) => BarcodeMatchError::InvalidInput(msg),
            other => BarcodeMatchError::Common(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, BarcodeMatchError>;
