//! 読み込み → 照合 → 選択 → 出力 の各段階
//!
//! 全行の候補を作り終えてから選択に入り、全行の選択が揃ってから出力する。

use crate::config::Config;
use crate::error::{BarcodeMatchError, Result};
use crate::loader;
use crate::review::{self, Reviewer};
use barcode_match_common::{finalize, CandidateList, Catalog, MatchOptions, MatchResult};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 入力ファイルの組
#[derive(Debug, Clone)]
pub struct Sources {
    pub names: PathBuf,
    pub catalog: PathBuf,
}

/// 入力ファイルを決める
///
/// 商品名称の表が未指定なら、対話モードでは入力を促し、
/// 非対話モードでは `MissingInput` を返す。
pub fn resolve_sources(
    names: Option<PathBuf>,
    catalog: Option<&Path>,
    base_dir: &Path,
    config: &Config,
    interactive: bool,
) -> Result<Sources> {
    let names = match names {
        Some(path) => path,
        None if interactive => review::prompt_names_path()?,
        None => {
            return Err(BarcodeMatchError::MissingInput(
                "準備した表（商品名称）を指定してください".into(),
            ))
        }
    };
    if !names.exists() {
        return Err(BarcodeMatchError::FileNotFound(names.display().to_string()));
    }

    let catalog = loader::resolve_catalog(catalog, base_dir, &config.catalog_file)?;
    Ok(Sources { names, catalog })
}

/// 全商品名の候補一覧を作る（入力順を保持）
pub fn match_names(catalog: &Catalog, raw_names: &[String], options: &MatchOptions) -> Result<Vec<CandidateList>> {
    options.validate()?;

    let progress = ProgressBar::new(raw_names.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let lists: Vec<CandidateList> = raw_names
        .par_iter()
        .enumerate()
        .map(|(i, name)| {
            let list = catalog.candidate_list(i, name, options);
            progress.inc(1);
            list
        })
        .collect();

    progress.finish_and_clear();

    for list in &lists {
        tracing::debug!(
            index = list.index,
            raw_name = %list.raw_name,
            candidates = list.candidates.len(),
            top_score = list.candidates.first().map(|c| c.score).unwrap_or_default(),
            "候補を作成"
        );
    }

    Ok(lists)
}

/// 2つの表を読み込んで候補一覧を作る
pub fn build_candidates(sources: &Sources, config: &Config) -> Result<(Vec<CandidateList>, usize)> {
    let raw_names = loader::load_raw_names(&sources.names, config)?;
    let entries = loader::load_catalog(&sources.catalog, config)?;
    let catalog = Catalog::new(entries)?;

    tracing::debug!(
        rows = catalog.len(),
        distinct = catalog.distinct_names(),
        "商品明细表を索引化"
    );

    let lists = match_names(&catalog, &raw_names, &MatchOptions::default())?;
    Ok((lists, catalog.len()))
}

/// 選択を集めて結果を確定する
pub fn review_and_finalize(lists: &[CandidateList], reviewer: &mut dyn Reviewer) -> Result<Vec<MatchResult>> {
    let selections = review::collect_selections(lists, reviewer)?;
    Ok(finalize(lists, &selections)?)
}

/// 候補JSONを読み込む
pub fn read_candidates_json(path: &Path) -> Result<Vec<CandidateList>> {
    if !path.exists() {
        return Err(BarcodeMatchError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
