use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::domain::config::upload::has_allowed_extension;

/// Middleware for the preview route: only top-level, non-hidden files with an
/// allowed image extension are served. Everything else answers 404.
pub async fn allow_listed_previews(request: Request<Body>, next: Next) -> Response {
    let requested = request.uri().path().trim_start_matches('/');

    let servable = !requested.is_empty()
        && !requested.contains('/')
        && !requested.starts_with('.')
        && !requested.to_ascii_lowercase().starts_with("%2e")
        && has_allowed_extension(requested);

    if servable {
        next.run(request).await
    } else {
        warn!("Refused preview of '{}'", requested);
        StatusCode::NOT_FOUND.into_response()
    }
}
