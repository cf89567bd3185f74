use crate::error::{BarcodeMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 商品名称の列名（既定）
pub const DEFAULT_NAME_COLUMN: &str = "商品名称";
/// 条码の列名（既定）
pub const DEFAULT_BARCODE_COLUMN: &str = "条码";
/// 自動検出する商品明细表のファイル名（既定）
pub const DEFAULT_CATALOG_FILE: &str = "商品明细表.xlsx";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub name_column: String,
    pub barcode_column: String,
    /// `--catalog` 省略時にカレントディレクトリから探すファイル
    pub catalog_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_column: DEFAULT_NAME_COLUMN.into(),
            barcode_column: DEFAULT_BARCODE_COLUMN.into(),
            catalog_file: DEFAULT_CATALOG_FILE.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BarcodeMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("barcode-match").join("config.json"))
    }
}
