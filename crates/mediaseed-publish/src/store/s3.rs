use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::errors::StoreError;
use crate::keys::ObjectFormat;

use super::BlobStore;

/// S3 bucket reached through the default AWS credential chain.
///
/// Creating the SDK client loads region and credentials, so build one store
/// per run and reuse it for every object.
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3BlobStore {
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = aws_sdk_s3::Client::new(&sdk_config);
        Self::with_client(client, bucket)
    }

    pub fn with_client(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn kind(&self) -> &'static str {
        "s3"
    }

    fn location(&self, key: &str) -> String {
        format!("s3://{}/{key}", self.bucket)
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StoreError> {
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body));
        if let Some(format) = ObjectFormat::from_key(key) {
            request = request.content_type(format.content_type());
        }

        request.send().await.map_err(|err| StoreError::S3 {
            bucket: self.bucket.clone(),
            key: key.to_string(),
            message: DisplayErrorContext(&err).to_string(),
        })?;

        tracing::debug!(bucket = %self.bucket, key = %key, "s3 object written");
        Ok(())
    }
}
