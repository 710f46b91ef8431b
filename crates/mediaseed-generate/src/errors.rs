use thiserror::Error;

use mediaseed_publish::StoreError;

use crate::checks::CheckIssue;

/// Errors emitted while generating or publishing datasets.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("dataset checks failed with {} issue(s)", .0.len())]
    ChecksFailed(Vec<CheckIssue>),
}
