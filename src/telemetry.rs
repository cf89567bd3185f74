//! 診断ログ（stderr）
//!
//! 進捗表示は println! で行い、ここでは `RUST_LOG` または `--verbose` で
//! 有効になる詳細ログだけを扱う。

use crate::error::{BarcodeMatchError, Result};
use tracing_subscriber::EnvFilter;

/// `--verbose` 時のログレベル
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) -> Result<()> {
    let level = default_level(verbose);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| BarcodeMatchError::Config(format!("ログレベル '{}' が不正: {}", level, e)))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| BarcodeMatchError::Config(format!("ログ初期化エラー: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "warn");
    }
}
