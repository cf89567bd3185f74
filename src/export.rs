//! 照合結果の出力（CLI版）

use crate::error::{BarcodeMatchError, Result};
use barcode_match_common::export::excel_core::{generate_result_buffer, RESULT_HEADERS};
use barcode_match_common::MatchResult;
use std::path::{Path, PathBuf};

/// 既定の出力ファイル名
pub const DEFAULT_OUTPUT_FILE: &str = "匹配结果.xlsx";

/// 出力先を決める（既存ディレクトリ指定時は既定ファイル名を付ける）
pub fn output_path(output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(DEFAULT_OUTPUT_FILE),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_OUTPUT_FILE),
    }
}

/// 照合結果をExcelに書き出す
pub fn write_results(results: &[MatchResult], output: &Path) -> Result<()> {
    let buffer = generate_result_buffer(results).map_err(BarcodeMatchError::ExcelGeneration)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, buffer)?;

    tracing::debug!(path = %output.display(), rows = results.len(), "Excelを出力");
    Ok(())
}

/// 結果表を標準出力に表示
pub fn print_preview(results: &[MatchResult]) {
    println!("{}", RESULT_HEADERS.join(" | "));
    println!("{}", "-".repeat(40));
    for r in results {
        println!("{} | {} | {}", r.original_name, r.barcode, r.matched_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_default() {
        assert_eq!(output_path(None), PathBuf::from("匹配结果.xlsx"));
    }

    #[test]
    fn test_output_path_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        assert_eq!(output_path(Some(dir.path())), dir.path().join("匹配结果.xlsx"));
    }

    #[test]
    fn test_output_path_file() {
        let path = PathBuf::from("out/result.xlsx");
        assert_eq!(output_path(Some(&path)), path);
    }

    #[test]
    fn test_output_path_without_extension_is_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("result");
        assert_eq!(output_path(Some(&path)), path);
    }

    #[test]
    fn test_write_results_creates_parent() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("sub").join("out.xlsx");
        write_results(&[MatchResult::default()], &path).unwrap();
        assert!(path.exists());
    }
}
