//! Object storage side of mediaseed.
//!
//! Serialized datasets are written through the [`BlobStore`] capability under
//! date-partitioned keys. Three stores ship with the crate: S3, a local
//! directory, and an in-memory map for dry runs and tests.

pub mod errors;
pub mod keys;
pub mod publisher;
pub mod store;

pub use errors::StoreError;
pub use keys::{ObjectFormat, object_key};
pub use publisher::{PublishedObject, Publisher};
pub use store::{BlobStore, LocalBlobStore, MemoryBlobStore, S3BlobStore, write_bytes_atomic};
