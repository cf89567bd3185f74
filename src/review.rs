//! 対話式候補選択モジュール
//!
//! 候補一覧を1件ずつ提示し、選ばれた位置を `Selections` にまとめる。
//! 自由入力は受け付けず、提示した候補からのみ選ばせる。

use crate::error::{BarcodeMatchError, Result};
use barcode_match_common::{CandidateList, Selections};
use dialoguer::{Input, Select};
use std::path::PathBuf;

/// 候補一覧から1件を選ぶ役
pub trait Reviewer {
    /// 選んだ候補の位置を返す（`list.candidates` の範囲内）
    fn choose(&mut self, list: &CandidateList, total: usize) -> Result<usize>;
}

/// 常に最上位の候補を採用（非対話モード）
#[derive(Debug, Default)]
pub struct TopCandidateReviewer;

impl Reviewer for TopCandidateReviewer {
    fn choose(&mut self, _list: &CandidateList, _total: usize) -> Result<usize> {
        Ok(0)
    }
}

/// ターミナルで選択させる
#[derive(Debug, Default)]
pub struct InteractiveReviewer;

impl Reviewer for InteractiveReviewer {
    fn choose(&mut self, list: &CandidateList, total: usize) -> Result<usize> {
        let items: Vec<String> = list.candidates.iter().map(|c| c.to_string()).collect();
        let label = if list.raw_name.is_empty() { "(空欄)" } else { list.raw_name.as_str() };

        Select::new()
            .with_prompt(format!("[{}/{}] {}", list.index + 1, total, label))
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| BarcodeMatchError::Prompt(e.to_string()))
    }
}

/// 全候補一覧について選択を集める
pub fn collect_selections(lists: &[CandidateList], reviewer: &mut dyn Reviewer) -> Result<Selections> {
    let mut selections = Selections::new();
    let total = lists.len();

    for list in lists {
        let position = reviewer.choose(list, total)?;
        if position >= list.candidates.len() {
            return Err(BarcodeMatchError::InvalidInput(format!(
                "行 {} の候補外が選択されました: {}",
                list.index + 1,
                position
            )));
        }
        tracing::debug!(
            index = list.index,
            raw_name = %list.raw_name,
            position,
            "候補を選択"
        );
        selections.select(list.index, position);
    }

    Ok(selections)
}

/// 準備した表のパスを入力させる
pub fn prompt_names_path() -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("準備した表（商品名称）のパス")
        .interact_text()
        .map_err(|e| BarcodeMatchError::Prompt(e.to_string()))?;

    let trimmed = input.trim().trim_matches('"');
    if trimmed.is_empty() {
        return Err(BarcodeMatchError::MissingInput("準備した表（商品名称）".into()));
    }
    Ok(PathBuf::from(trimmed))
}
