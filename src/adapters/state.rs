use axum::extract::FromRef;
use std::{path::PathBuf, sync::Arc};

use crate::application::services::PhotoService;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub upload_dir: PathBuf,
    pub photo_service: Arc<PhotoService>,
}
