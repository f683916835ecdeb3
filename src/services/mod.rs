mod error;

pub use error::StorageError;

use std::{path::Path, sync::Arc};

use crate::{
    adapters::repositories::FsPhotoRepository,
    application::repositories::photo_repository::PhotoRepository,
};

/// Prepares the upload directory and returns the repository backed by it.
/// The directory is created if missing and must be readable.
pub async fn create_photo_repository(
    upload_dir: &Path,
) -> Result<Arc<dyn PhotoRepository>, StorageError> {
    tokio::fs::create_dir_all(upload_dir).await?;
    let _entries = tokio::fs::read_dir(upload_dir).await?;

    Ok(Arc::new(FsPhotoRepository::new(upload_dir)))
}
