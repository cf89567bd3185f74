//! 照合データの型定義
//!
//! - CatalogEntry: 商品明细表の1行
//! - Candidate: 1つの商品名に対する照合候補
//! - CandidateList: 1つの商品名に提示する候補一覧（レビュー依頼）
//! - MatchResult: 確定した照合結果（出力表の1行）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 商品明细表の1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub barcode: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, barcode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            barcode: barcode.into(),
        }
    }
}

/// 照合候補
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub barcode: String,
    pub name: String,
    /// 類似度 (0-100)
    pub score: f64,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} ({:.1})", self.barcode, self.name, self.score)
    }
}

/// 1つの商品名に対する候補一覧
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateList {
    /// 元の表での行位置（0始まり、ヘッダー除く）
    pub index: usize,
    pub raw_name: String,
    pub candidates: Vec<Candidate>,
}

/// 確定した照合結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub original_name: String,
    pub barcode: String,
    pub matched_name: String,
}

impl MatchResult {
    pub fn from_candidate(original_name: &str, candidate: &Candidate) -> Self {
        Self {
            original_name: original_name.to_string(),
            barcode: candidate.barcode.clone(),
            matched_name: candidate.name.clone(),
        }
    }
}
