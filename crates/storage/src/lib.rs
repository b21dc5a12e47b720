//! Blob storage for uploaded site images.
//!
//! [`BlobStore`] abstracts the bucket so handlers and tests don't care
//! whether bytes land in S3 or in memory. Keys are generated with a UUID
//! component so concurrent uploads of identically-named files never
//! collide.

pub mod memory;
pub mod s3;

use async_trait::async_trait;
use uuid::Uuid;

pub use memory::MemoryBlobStore;
pub use s3::S3BlobStore;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for blob store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The bucket write failed (network, credentials, bucket policy).
    #[error("Blob upload failed: {0}")]
    Upload(String),

    /// The store is misconfigured (missing bucket or public base URL).
    #[error("Storage configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// BlobStore
// ---------------------------------------------------------------------------

/// Write-side of the image bucket.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload `bytes` under `key` with the given content type, returning
    /// the publicly resolvable URL of the stored object.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;
}

/// Generate a collision-resistant object key under `prefix`, keeping the
/// original file extension so content types stay guessable from the URL.
///
/// `blob_key("projects", "villa.jpg")` yields `projects/<uuid>.jpg`.
pub fn blob_key(prefix: &str, file_name: &str) -> String {
    let id = Uuid::new_v4();
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.len() <= 8 => format!("{prefix}/{id}.{ext}"),
        _ => format!("{prefix}/{id}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
