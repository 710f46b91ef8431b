use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use mediaseed_core::Dataset;

use crate::errors::StoreError;
use crate::keys::{ObjectFormat, object_key};
use crate::store::BlobStore;

/// Summary of one written object.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedObject {
    pub key: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ObjectFormat>,
    pub bytes: u64,
}

/// Writes payloads for a single batch date. Failures are returned as-is.
pub struct Publisher<'a> {
    store: &'a dyn BlobStore,
    batch_date: NaiveDate,
}

impl<'a> Publisher<'a> {
    pub fn new(store: &'a dyn BlobStore, batch_date: NaiveDate) -> Self {
        Self { store, batch_date }
    }

    pub fn batch_date(&self) -> NaiveDate {
        self.batch_date
    }

    /// Write a dataset payload under its partitioned key.
    pub async fn publish_dataset(
        &self,
        dataset: Dataset,
        format: ObjectFormat,
        body: Vec<u8>,
    ) -> Result<PublishedObject, StoreError> {
        let key = object_key(dataset, format, self.batch_date);
        self.publish(&key, body).await
    }

    pub async fn publish(&self, key: &str, body: Vec<u8>) -> Result<PublishedObject, StoreError> {
        let start = Instant::now();
        let bytes = body.len() as u64;
        let location = self.store.location(key);

        self.store.put(key, body).await?;

        info!(
            event = "object_published",
            store = self.store.kind(),
            location = %location,
            bytes,
            duration_ms = start.elapsed().as_millis() as u64,
        );

        Ok(PublishedObject {
            key: key.to_string(),
            location,
            format: ObjectFormat::from_key(key),
            bytes,
        })
    }
}
