//! Excel生成（共通ライブラリ）
//!
//! 照合結果を3列（原商品名称・条码・匹配商品名称）の表として出力する

use crate::types::MatchResult;
use rust_xlsxwriter::*;

/// 出力シート名
pub const RESULT_SHEET_NAME: &str = "匹配结果";

/// 出力表のヘッダー（列順固定）
pub const RESULT_HEADERS: [&str; 3] = ["原商品名称", "条码", "匹配商品名称"];

const NAME_COL_WIDTH: f64 = 36.0;
const BARCODE_COL_WIDTH: f64 = 18.0;

/// 照合結果のExcelをバッファに生成
pub fn generate_result_buffer(results: &[MatchResult]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    // 条码は先頭0や桁数を保つため文字列書式
    let text_format = Format::new().set_num_format("@");

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(RESULT_SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, width) in [NAME_COL_WIDTH, BARCODE_COL_WIDTH, NAME_COL_WIDTH].iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    for (col, header) in RESULT_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    for (i, result) in results.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet
            .write_string(row, 0, &result.original_name)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
        worksheet
            .write_string_with_format(row, 1, &result.barcode, &text_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
        worksheet
            .write_string(row, 2, &result.matched_name)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_empty() {
        let buf = generate_result_buffer(&[]).unwrap();
        // xlsxはzip形式
        assert_eq!(&buf[..2], b"PK");
    }

    #[test]
    fn test_generate_rows() {
        let results = vec![
            MatchResult {
                original_name: "可口可乐 330ml".into(),
                barcode: "06901234567890".into(),
                matched_name: "330ml可口可乐".into(),
            },
            MatchResult::default(),
        ];
        let buf = generate_result_buffer(&results).unwrap();
        assert!(buf.len() > 100);
    }
}
