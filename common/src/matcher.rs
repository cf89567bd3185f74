//! 商品名照合モジュール
//!
//! 商品名1件ごとに、商品明细表から候補を選び出して類似度順に並べる。
//!
//! ## 処理フロー
//! 1. 重複を除いた明细表の商品名すべてと類似度を計算
//! 2. 上位 `limit` 件を取得（同点は明细表の出現順）
//! 3. `threshold` 未満を除外（全滅した場合は最上位1件のみ残す）
//! 4. 商品名を明细表の行に展開（同名・別条码の行をすべて残す）
//! 5. (条码, 商品名称) の組で重複除去

use crate::error::{Error, Result};
use crate::scorer::token_sort_ratio;
use crate::types::{Candidate, CandidateList, CatalogEntry};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// 上位候補数の既定値
pub const DEFAULT_LIMIT: usize = 20;

/// 候補として残す最低スコアの既定値
pub const DEFAULT_THRESHOLD: f64 = 20.0;

/// 照合オプション
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// 残す商品名（重複除去後）の最大数
    pub limit: usize,
    /// 最低スコア (0-100)
    pub threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MatchOptions {
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(Error::InvalidInput("limit は1以上が必要です".into()));
        }
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(Error::InvalidInput(format!(
                "threshold は0-100の範囲が必要です: {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// 照合用に索引を付けた商品明细表
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// 重複を除いた商品名（出現順）
    names: Vec<String>,
    /// 商品名 -> 行番号
    rows_by_name: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// 商品名称が空欄の行は除外する。残りが無ければエラー。
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let entries: Vec<CatalogEntry> = entries
            .into_iter()
            .filter(|e| !e.name.trim().is_empty())
            .collect();
        if entries.is_empty() {
            return Err(Error::InvalidInput("商品明细表にデータ行がありません".into()));
        }

        let mut names = Vec::new();
        let mut rows_by_name: HashMap<String, Vec<usize>> = HashMap::new();

        for (i, entry) in entries.iter().enumerate() {
            let rows = rows_by_name.entry(entry.name.clone()).or_default();
            if rows.is_empty() {
                names.push(entry.name.clone());
            }
            rows.push(i);
        }

        Ok(Self {
            entries,
            names,
            rows_by_name,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 重複を除いた商品名の数
    pub fn distinct_names(&self) -> usize {
        self.names.len()
    }

    /// 商品名1件の候補一覧を作る
    pub fn candidates(&self, raw_name: &str, options: &MatchOptions) -> Vec<Candidate> {
        let mut scored: Vec<(&str, f64)> = self
            .names
            .iter()
            .map(|name| (name.as_str(), token_sort_ratio(raw_name, name)))
            .collect();
        sort_by_score(&mut scored);
        scored.truncate(options.limit);

        let mut kept: Vec<(&str, f64)> = scored
            .iter()
            .copied()
            .filter(|(_, score)| *score >= options.threshold)
            .collect();
        if kept.is_empty() {
            // 閾値未満でも最低1件は提示する
            kept.extend(scored.first().copied());
        }
        sort_by_score(&mut kept);

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut candidates = Vec::new();
        for (name, score) in kept {
            let Some(rows) = self.rows_by_name.get(name) else {
                continue;
            };
            for &row in rows {
                let entry = &self.entries[row];
                if seen.insert((entry.barcode.as_str(), entry.name.as_str())) {
                    candidates.push(Candidate {
                        barcode: entry.barcode.clone(),
                        name: entry.name.clone(),
                        score,
                    });
                }
            }
        }

        candidates
    }

    /// 商品名1件分のレビュー依頼を作る
    pub fn candidate_list(&self, index: usize, raw_name: &str, options: &MatchOptions) -> CandidateList {
        CandidateList {
            index,
            raw_name: raw_name.to_string(),
            candidates: self.candidates(raw_name, options),
        }
    }

    /// 全商品名の候補一覧を入力順に作る
    pub fn match_all(&self, raw_names: &[String], options: &MatchOptions) -> Result<Vec<CandidateList>> {
        options.validate()?;
        Ok(raw_names
            .iter()
            .enumerate()
            .map(|(i, name)| self.candidate_list(i, name, options))
            .collect())
    }
}

/// スコア降順の安定ソート
fn sort_by_score(items: &mut [(&str, f64)]) {
    items.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
}
