use thiserror::Error;

/// Core error type shared across mediaseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A dataset name that is not one of the generated datasets.
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
    /// An identifier that does not follow its expected pattern.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Convenience alias for results returned by mediaseed crates.
pub type Result<T> = std::result::Result<T, Error>;
