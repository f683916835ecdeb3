use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::adapters::{
    controllers::{health_controller::HealthController, photo_controller::PhotoController},
    middleware::allow_listed_previews,
    state::AppState,
};

async fn hello_world() -> &'static str {
    "Photo upload service is running"
}

pub fn router(app_state: AppState) -> Router {
    // Stored photos are served as-is so the client can render previews.
    let previews: Router = Router::new()
        .fallback_service(ServeDir::new(&app_state.upload_dir))
        .layer(middleware::from_fn(allow_listed_previews));

    Router::new()
        .route("/", get(hello_world))
        .route("/api/health", get(HealthController::health_check))
        .route(
            "/api/files",
            get(PhotoController::list_photos)
                .post(PhotoController::add_photo)
                // The upload handler enforces its own size limit while streaming.
                .layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/api/files/{file_name}",
            delete(PhotoController::delete_photo),
        )
        .nest_service("/uploads", previews)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(app_state)
}
