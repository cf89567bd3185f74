//! 入力表の読み込み
//!
//! xlsx/xls/ods の先頭シートを読み、1行目をヘッダーとして
//! 必要な列を名前で探す。列が無ければ読み込み時点でエラーにする。

use crate::config::Config;
use crate::error::{BarcodeMatchError, Result};
use barcode_match_common::CatalogEntry;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};

/// ヘッダー付きの表（全セル文字列化済み）
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// 先頭行をヘッダー、残りをデータ行とする。全セル空の行は捨てる。
    pub fn from_range(range: &Range<Data>) -> Self {
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|r| {
                r.iter()
                    .map(|c| cell_to_string(c).trim().to_string())
                    .collect::<Vec<String>>()
            })
            .unwrap_or_default();

        let rows: Vec<Vec<String>> = rows
            .filter(|r| r.iter().any(|c| !matches!(c, Data::Empty)))
            .map(|r| r.iter().map(cell_to_string).collect())
            .collect();

        Self { headers, rows }
    }

    /// 列名から列番号を取得
    pub fn column(&self, name: &str, source: &Path) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                BarcodeMatchError::InvalidInput(format!(
                    "列「{}」がありません: {}（存在する列: {}）",
                    name,
                    source.display(),
                    self.headers.join(", ")
                ))
            })
    }

    fn cell(row: &[String], col: usize) -> String {
        row.get(col).cloned().unwrap_or_default()
    }
}

/// セル値を文字列へ
///
/// 数値で保存された条码が "6.9e12" や "123.0" にならないよう、
/// 整数値の浮動小数は小数部なしで出す。
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{:.0}", f),
        other => other.to_string(),
    }
}

/// 先頭シートを読み込む
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(BarcodeMatchError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| BarcodeMatchError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| BarcodeMatchError::InvalidInput(format!("シートがありません: {}", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| BarcodeMatchError::SpreadsheetRead(format!("{} [{}]: {}", path.display(), sheet, e)))?;

    let table = Table::from_range(&range);
    if table.headers.is_empty() {
        return Err(BarcodeMatchError::InvalidInput(format!(
            "ヘッダー行がありません: {}",
            path.display()
        )));
    }

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        rows = table.rows.len(),
        "表を読み込みました"
    );

    Ok(table)
}

/// 準備した表から商品名称を読み込む（行順を保持）
pub fn load_raw_names(path: &Path, config: &Config) -> Result<Vec<String>> {
    let table = read_table(path)?;
    raw_names_from_table(&table, path, config)
}

pub fn raw_names_from_table(table: &Table, source: &Path, config: &Config) -> Result<Vec<String>> {
    let col = table.column(&config.name_column, source)?;
    Ok(table.rows.iter().map(|r| Table::cell(r, col)).collect())
}

/// 商品明细表を読み込む（行順を保持）
pub fn load_catalog(path: &Path, config: &Config) -> Result<Vec<CatalogEntry>> {
    let table = read_table(path)?;
    catalog_from_table(&table, path, config)
}

/// 商品名称が空欄の行は候補にしないため読み飛ばす
pub fn catalog_from_table(table: &Table, source: &Path, config: &Config) -> Result<Vec<CatalogEntry>> {
    let name_col = table.column(&config.name_column, source)?;
    let barcode_col = table.column(&config.barcode_column, source)?;

    let entries: Vec<CatalogEntry> = table
        .rows
        .iter()
        .map(|r| CatalogEntry::new(Table::cell(r, name_col), Table::cell(r, barcode_col)))
        .filter(|e| !e.name.trim().is_empty())
        .collect();

    let skipped = table.rows.len() - entries.len();
    if skipped > 0 {
        tracing::debug!(path = %source.display(), skipped, "商品名称が空欄の行を除外");
    }

    Ok(entries)
}

/// 商品明细表のパスを決める
///
/// 明示指定があればそれを使い、無ければ `base_dir` 直下の既定ファイルを探す。
pub fn resolve_catalog(explicit: Option<&Path>, base_dir: &Path, file_name: &str) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.exists() => Ok(path.to_path_buf()),
        Some(path) => Err(BarcodeMatchError::FileNotFound(path.display().to_string())),
        None => {
            let local = base_dir.join(file_name);
            if local.exists() {
                tracing::debug!(path = %local.display(), "商品明细表を自動検出");
                Ok(local)
            } else {
                Err(BarcodeMatchError::MissingLocalResource(local.display().to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn range(cells: Vec<Vec<Data>>) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in cells.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), cell);
            }
        }
        range
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_cell_to_string_numbers() {
        assert_eq!(cell_to_string(&Data::Float(6901234567890.0)), "6901234567890");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&s("abc")), "abc");
    }

    #[test]
    fn test_table_skips_blank_rows() {
        let r = range(vec![
            vec![s("商品名称"), s("条码")],
            vec![s("雪碧"), Data::Float(6901.0)],
            vec![Data::Empty, Data::Empty],
            vec![Data::Empty, s("6902")],
        ]);
        let table = Table::from_range(&r);
        assert_eq!(table.headers, vec!["商品名称", "条码"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["雪碧", "6901"]);
        assert_eq!(table.rows[1], vec!["", "6902"]);
    }

    #[test]
    fn test_header_trimmed() {
        let r = range(vec![vec![s(" 商品名称 ")], vec![s("雪碧")]]);
        let table = Table::from_range(&r);
        let names = raw_names_from_table(&table, Path::new("names.xlsx"), &Config::default()).unwrap();
        assert_eq!(names, vec!["雪碧"]);
    }

    #[test]
    fn test_missing_column_is_invalid_input() {
        let r = range(vec![vec![s("品名"), s("条码")], vec![s("雪碧"), s("1")]]);
        let table = Table::from_range(&r);
        let err = catalog_from_table(&table, Path::new("detail.xlsx"), &Config::default()).unwrap_err();
        match err {
            BarcodeMatchError::InvalidInput(msg) => {
                assert!(msg.contains("商品名称"));
                assert!(msg.contains("品名"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_catalog_keeps_row_order() {
        let r = range(vec![
            vec![s("条码"), s("商品名称")],
            vec![s("111"), s("A")],
            vec![s("222"), s("A")],
            vec![s("333"), s("B")],
        ]);
        let table = Table::from_range(&r);
        let entries = catalog_from_table(&table, Path::new("detail.xlsx"), &Config::default()).unwrap();
        assert_eq!(
            entries,
            vec![
                CatalogEntry::new("A", "111"),
                CatalogEntry::new("A", "222"),
                CatalogEntry::new("B", "333"),
            ]
        );
    }

    #[test]
    fn test_catalog_skips_blank_names() {
        let r = range(vec![
            vec![s("商品名称"), s("条码")],
            vec![Data::Empty, s("999")],
            vec![s("  "), s("998")],
            vec![s("雪碧 330ml"), s("6901")],
        ]);
        let table = Table::from_range(&r);
        let entries = catalog_from_table(&table, Path::new("detail.xlsx"), &Config::default()).unwrap();
        assert_eq!(entries, vec![CatalogEntry::new("雪碧 330ml", "6901")]);
    }

    #[test]
    fn test_resolve_catalog_explicit_missing() {
        let dir = tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("nope.xlsx");
        let err = resolve_catalog(Some(&missing), dir.path(), "商品明细表.xlsx").unwrap_err();
        assert!(matches!(err, BarcodeMatchError::FileNotFound(_)));
    }

    #[test]
    fn test_resolve_catalog_local_missing_reports_path() {
        let dir = tempdir().expect("Failed to create temp dir");
        let err = resolve_catalog(None, dir.path(), "商品明细表.xlsx").unwrap_err();
        match err {
            BarcodeMatchError::MissingLocalResource(path) => assert!(path.ends_with("商品明细表.xlsx")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_catalog_local_found() {
        let dir = tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("商品明细表.xlsx"), b"").unwrap();
        let path = resolve_catalog(None, dir.path(), "商品明细表.xlsx").unwrap();
        assert_eq!(path, dir.path().join("商品明细表.xlsx"));
    }

    #[test]
    fn test_read_table_missing_file() {
        let err = read_table(Path::new("/nonexistent/path/names.xlsx")).unwrap_err();
        assert!(matches!(err, BarcodeMatchError::FileNotFound(_)));
    }
}
