use thiserror::Error;

/// Errors surfaced by blob stores. None of them are retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error writing '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("s3 put failed for s3://{bucket}/{key}: {message}")]
    S3 {
        bucket: String,
        key: String,
        message: String,
    },
    #[error("invalid object key '{0}'")]
    InvalidKey(String),
}
