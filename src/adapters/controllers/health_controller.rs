use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    adapters::state::AppState,
    domain::config::upload::{ALLOWED_EXTENSIONS, MAX_FILE_SIZE, MAX_SIDE_SIZE},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(rename = "uploadDir")]
    pub upload_dir: String,
    #[serde(rename = "photoCount")]
    pub photo_count: usize,
    pub config: HealthConfigInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthConfigInfo {
    #[serde(rename = "maxSize")]
    pub max_size: u64,
    #[serde(rename = "maxSideSize")]
    pub max_side_size: u32,
    #[serde(rename = "allowedExtensions")]
    pub allowed_extensions: Vec<String>,
}

pub struct HealthController;

impl HealthController {
    /// GET /api/health
    ///
    /// Reports `degraded` when the upload directory cannot be listed.
    pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
        info!("Health check requested");

        let (status, photo_count) = match app_state.photo_service.list_photos().await {
            Ok(photos) => ("healthy", photos.len()),
            Err(e) => {
                warn!("Health check could not list photos: {:?}", e);
                ("degraded", 0)
            }
        };

        let config = HealthConfigInfo {
            max_size: MAX_FILE_SIZE,
            max_side_size: MAX_SIDE_SIZE,
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|e| format!(".{}", e)).collect(),
        };

        Json(HealthResponse {
            status: status.to_string(),
            upload_dir: app_state.upload_dir.display().to_string(),
            photo_count,
            config,
        })
    }
}
