use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    application::{
        error::ApplicationError, repositories::photo_repository::PhotoRepository,
        services::image_processor,
    },
    domain::{
        config::upload::{MAX_FILE_SIZE, MAX_SIDE_SIZE},
        models::photo::{PhotoUpload, StoredPhoto},
    },
    services::StorageError,
};

/// On-disk name for an upload: the base name the client sent.
///
/// The stored bytes are always JPEG, but the client's extension is kept, so
/// `photo.png` is saved as JPEG data named `photo.png`. Renaming to `.jpg`
/// would happen here.
pub fn stored_file_name(upload_name: &str) -> &str {
    upload_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(upload_name)
}

pub struct PhotoService {
    repository: Arc<dyn PhotoRepository>,
}

impl PhotoService {
    pub fn new(repository: Arc<dyn PhotoRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_photos(&self) -> Result<Vec<StoredPhoto>, ApplicationError> {
        let photos = self.repository.list().await.map_err(|e| {
            error!("Upload directory could not be listed: {}", e);
            ApplicationError::InternalError(e.to_string())
        })?;

        info!("Listed {} photos", photos.len());
        Ok(photos)
    }

    /// Size and content-type checks, in that order.
    pub fn validate(upload: &PhotoUpload) -> Result<(), ApplicationError> {
        if !upload.validate_size(MAX_FILE_SIZE) {
            warn!("Rejected '{}': larger than {} bytes", upload.file_name, MAX_FILE_SIZE);
            return Err(ApplicationError::FileTooLarge);
        }

        if !upload.is_image() {
            warn!(
                "Rejected '{}': content type '{}' is not an image",
                upload.file_name, upload.content_type
            );
            return Err(ApplicationError::NotAnImage);
        }

        Ok(())
    }

    pub async fn add_photo(&self, upload: PhotoUpload) -> Result<StoredPhoto, ApplicationError> {
        Self::validate(&upload)?;

        // An empty base name is refused by the repository and reported as a
        // processing failure.
        let name = stored_file_name(&upload.file_name).to_string();

        let content = upload.content;
        let jpeg = tokio::task::spawn_blocking(move || {
            image_processor::process_upload(&content, MAX_SIDE_SIZE)
        })
        .await
        .map_err(|e| processing_failed(&name, e.to_string()))?
        .map_err(|e| processing_failed(&name, e.to_string()))?;

        let photo = self
            .repository
            .put(&name, jpeg)
            .await
            .map_err(|e| processing_failed(&name, e.to_string()))?;

        info!("Stored photo '{}' ({} KiB)", photo.name, photo.size_kib);
        Ok(photo)
    }

    pub async fn delete_photo(&self, name: &str) -> Result<(), ApplicationError> {
        self.repository.get(name).await.map_err(|e| match e {
            StorageError::NotFound(_) => {
                warn!("Delete requested for missing photo '{}'", name);
                ApplicationError::NotFound
            }
            other => other.into(),
        })?;

        match self.repository.delete(name).await {
            Ok(()) => {
                info!("Deleted photo '{}'", name);
                Ok(())
            }
            Err(StorageError::NotFound(_)) => Err(ApplicationError::NotFound),
            Err(e) => {
                error!("Failed to delete photo '{}': {}", name, e);
                Err(ApplicationError::BadRequest(e.to_string()))
            }
        }
    }
}

fn processing_failed(name: &str, reason: String) -> ApplicationError {
    error!("Processing upload '{}' failed: {}", name, reason);
    ApplicationError::ProcessingFailed(reason)
}
