mod local;
mod memory;
mod s3;

use async_trait::async_trait;

use crate::errors::StoreError;

pub use local::{LocalBlobStore, write_bytes_atomic};
pub use memory::MemoryBlobStore;
pub use s3::S3BlobStore;

/// Trait implemented by object stores that accept whole-object writes.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Returns the store identifier (e.g. `s3`).
    fn kind(&self) -> &'static str;

    /// Human-readable location of `key`, used in logs and reports.
    fn location(&self, key: &str) -> String;

    /// Write `body` under `key`, replacing any existing object.
    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StoreError>;
}
