mod adapters;
mod application;
mod domain;
mod services;
#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use adapters::{routes, state::AppState};
use application::services::PhotoService;
use domain::config::server::ServerConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("ERROR: invalid server configuration");

    tracing::info!(
        "Starting photo-upload-service with upload directory {}",
        config.upload_dir.display()
    );

    let cors = match &config.cors_allowed_origins {
        Some(allowed_origins) => {
            let origins: Vec<_> = allowed_origins
                .iter()
                .map(|s| s.parse().expect("Invalid CORS origin"))
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Allow all origins if not specified (only for development)
        None => CorsLayer::permissive(),
    };

    // An unusable upload directory is a configuration error, not a per-request one.
    let photo_repository = services::create_photo_repository(&config.upload_dir)
        .await
        .expect("ERROR: upload directory is missing or unreadable");

    let app_state = AppState {
        upload_dir: config.upload_dir.clone(),
        photo_service: Arc::new(PhotoService::new(photo_repository)),
    };

    let router = routes::router(app_state).layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
