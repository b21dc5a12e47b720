//! S3-backed [`BlobStore`] implementation.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::{BlobStore, StorageError};

/// Blob store writing to an S3 (or S3-compatible) bucket.
///
/// `public_base_url` is the prefix public clients read objects from; for a
/// plain S3 bucket that is `https://{bucket}.s3.{region}.amazonaws.com`,
/// for a CDN-fronted bucket the distribution origin.
#[derive(Clone)]
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3BlobStore {
    /// Build a store from the ambient AWS configuration (env/instance
    /// credentials), the bucket name, and the public base URL.
    pub async fn from_env(bucket: String, public_base_url: String) -> Result<Self, StorageError> {
        if bucket.is_empty() {
            return Err(StorageError::Config("bucket name is empty".to_string()));
        }
        if public_base_url.is_empty() {
            return Err(StorageError::Config("public base URL is empty".to_string()));
        }
        let config = aws_config::load_from_env().await;
        Ok(Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        tracing::debug!(key, size, bucket = %self.bucket, "Uploaded blob");
        Ok(self.public_url(key))
    }
}
