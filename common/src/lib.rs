//! Barcode Match Common Library
//!
//! 商品名称と条码の照合に使う型・類似度・候補選定ロジック

pub mod types;
pub mod error;
pub mod scorer;
pub mod matcher;
pub mod review;
pub mod export;

pub use types::{Candidate, CandidateList, CatalogEntry, MatchResult};
pub use error::{Error, Result};
pub use scorer::{ratio, token_sort_ratio};
pub use matcher::{Catalog, MatchOptions, DEFAULT_LIMIT, DEFAULT_THRESHOLD};
pub use review::{finalize, Selections};
