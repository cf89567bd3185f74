//! レビュー（人による候補選択）の入出力
//!
//! 照合側は `CandidateList` の一覧を渡し、レビュー側は行番号ごとに
//! 候補の位置を返す。結果の確定は全行の選択が揃ってから行う。

use crate::error::{Error, Result};
use crate::types::{CandidateList, MatchResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 行番号 -> 候補一覧内の位置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(BTreeMap<usize, usize>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全行で最上位の候補を選ぶ
    pub fn top(lists: &[CandidateList]) -> Self {
        Self(lists.iter().map(|l| (l.index, 0)).collect())
    }

    pub fn select(&mut self, index: usize, position: usize) {
        self.0.insert(index, position);
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.0.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 選択を検証して照合結果を確定する
///
/// 1行でも選択が欠けている、または提示していない候補を指している場合は
/// 何も返さずエラーにする。
pub fn finalize(lists: &[CandidateList], selections: &Selections) -> Result<Vec<MatchResult>> {
    if let Some(unknown) = selections
        .0
        .keys()
        .find(|idx| !lists.iter().any(|l| l.index == **idx))
    {
        return Err(Error::InvalidSelection(format!(
            "行 {} に対応する候補一覧がありません",
            unknown
        )));
    }

    lists
        .iter()
        .map(|list| {
            let position = selections
                .get(list.index)
                .ok_or(Error::MissingSelection(list.index))?;
            let candidate = list.candidates.get(position).ok_or_else(|| {
                Error::InvalidSelection(format!(
                    "行 {} ({}) の候補は{}件ですが位置 {} が選択されました",
                    list.index,
                    list.raw_name,
                    list.candidates.len(),
                    position
                ))
            })?;
            Ok(MatchResult::from_candidate(&list.raw_name, candidate))
        })
        .collect()
}
