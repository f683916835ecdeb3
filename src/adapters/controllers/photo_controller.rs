use axum::{
    extract::{
        multipart::{Field, MultipartRejection},
        Multipart, Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::photo_dto::{DeletePhotoResponse, PhotoListResponse},
        state::AppState,
    },
    application::error::ApplicationError,
    domain::{config::upload::MAX_FILE_SIZE, models::photo::PhotoUpload},
};

pub const UPLOAD_COMPLETED_MESSAGE: &str = "Upload completed successfully!";

pub struct PhotoController;

impl PhotoController {
    /// GET /api/files
    pub async fn list_photos(
        State(app_state): State<AppState>,
    ) -> Result<Json<PhotoListResponse>, ApplicationError> {
        let photos = app_state.photo_service.list_photos().await?;
        Ok(Json(PhotoListResponse::from(photos)))
    }

    /// POST /api/files
    ///
    /// Only the first file part is processed; anything after it is ignored.
    pub async fn add_photo(
        State(app_state): State<AppState>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<(StatusCode, String), ApplicationError> {
        let mut multipart = multipart.map_err(|e| {
            warn!("Rejected non-multipart upload: {}", e);
            ApplicationError::UnsupportedMediaType
        })?;

        let upload = read_first_file(&mut multipart).await?;
        info!(
            "Received upload '{}' ({}, {} bytes read)",
            upload.file_name,
            upload.content_type,
            upload.size()
        );

        app_state.photo_service.add_photo(upload).await?;

        Ok((StatusCode::OK, UPLOAD_COMPLETED_MESSAGE.to_string()))
    }

    /// DELETE /api/files/{file_name}
    pub async fn delete_photo(
        State(app_state): State<AppState>,
        Path(file_name): Path<String>,
    ) -> Result<Json<DeletePhotoResponse>, ApplicationError> {
        app_state.photo_service.delete_photo(&file_name).await?;
        Ok(Json(DeletePhotoResponse::for_photo(&file_name)))
    }
}

/// Skips fields until the first one carrying a filename and reads it.
async fn read_first_file(multipart: &mut Multipart) -> Result<PhotoUpload, ApplicationError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Invalid multipart data: {}", e);
        ApplicationError::BadRequest("Invalid request format".to_string())
    })? {
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        let content_type = field.content_type().unwrap_or_default().to_string();
        let content = read_bounded(field, MAX_FILE_SIZE).await?;

        return Ok(PhotoUpload::new(file_name, content_type, content));
    }

    warn!("Upload contained no file part");
    Err(ApplicationError::NoFileSelected)
}

/// Reads at most `limit + 1` bytes: enough to tell an oversized file apart
/// without buffering all of it.
async fn read_bounded(mut field: Field<'_>, limit: u64) -> Result<Vec<u8>, ApplicationError> {
    let cap = limit as usize + 1;
    let mut content = Vec::new();

    while let Some(chunk) = field.chunk().await.map_err(|e| {
        warn!("Cannot read file bytes: {}", e);
        ApplicationError::BadRequest("Invalid file data".to_string())
    })? {
        content.extend_from_slice(&chunk);
        if content.len() >= cap {
            content.truncate(cap);
            break;
        }
    }

    Ok(content)
}
