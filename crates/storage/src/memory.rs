//! In-memory [`BlobStore`] used by integration tests and local development
//! without bucket credentials.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{BlobStore, StorageError};

/// Stores blobs in a process-local map and hands out `memory://` URLs.
#[derive(Default)]
pub struct MemoryBlobStore {
    objects: Mutex<HashMap<String, (String, Vec<u8>)>>,
    fail_uploads: bool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every upload fails, for exercising fail-closed paths.
    pub fn failing() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            fail_uploads: true,
        }
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().expect("blob map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch a stored object's content type and bytes by key.
    pub fn get(&self, key: &str) -> Option<(String, Vec<u8>)> {
        self.objects
            .lock()
            .expect("blob map poisoned")
            .get(key)
            .cloned()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        if self.fail_uploads {
            return Err(StorageError::Upload("simulated upload failure".to_string()));
        }
        self.objects
            .lock()
            .expect("blob map poisoned")
            .insert(key.to_string(), (content_type.to_string(), bytes));
        Ok(format!("memory://{key}"))
    }
}
