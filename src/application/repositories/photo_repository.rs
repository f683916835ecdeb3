use async_trait::async_trait;

use crate::{domain::models::photo::StoredPhoto, services::StorageError};

/// Photo store keyed by file name.
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// All stored photos with an allowed extension, sorted by name.
    async fn list(&self) -> Result<Vec<StoredPhoto>, StorageError>;
    /// Exact-name lookup of any stored file.
    async fn get(&self, name: &str) -> Result<StoredPhoto, StorageError>;
    /// Writes (or replaces) `name`. Either the whole content lands or nothing does.
    async fn put(&self, name: &str, content: Vec<u8>) -> Result<StoredPhoto, StorageError>;
    async fn delete(&self, name: &str) -> Result<(), StorageError>;
}
