use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::application::error::ApplicationError;

pub const UNSUPPORTED_MEDIA_TYPE_MESSAGE: &str = "ERROR: Unsupported media type!";
pub const NO_FILE_SELECTED_MESSAGE: &str = "ERROR: No file was selected!";
pub const FILE_TOO_LARGE_MESSAGE: &str = "ERROR: The file cannot be larger than 1MB!";
pub const NOT_AN_IMAGE_MESSAGE: &str = "ERROR: The uploaded file is not an image!";
pub const SERVER_FAILED_MESSAGE: &str = "ERROR: The server failed to fulfill your request! ";

/// Errors are answered with plain-text bodies; `NotFound` has no body at all.
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApplicationError::NotFound => {
                warn!("Resource not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            ApplicationError::UnsupportedMediaType => {
                warn!("Request is not multipart");
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    UNSUPPORTED_MEDIA_TYPE_MESSAGE.to_string(),
                )
            }
            ApplicationError::NoFileSelected => {
                (StatusCode::BAD_REQUEST, NO_FILE_SELECTED_MESSAGE.to_string())
            }
            ApplicationError::FileTooLarge => {
                (StatusCode::BAD_REQUEST, FILE_TOO_LARGE_MESSAGE.to_string())
            }
            ApplicationError::NotAnImage => {
                (StatusCode::BAD_REQUEST, NOT_AN_IMAGE_MESSAGE.to_string())
            }
            ApplicationError::ProcessingFailed(msg) => (
                StatusCode::EXPECTATION_FAILED,
                format!("{}{}", SERVER_FAILED_MESSAGE, msg),
            ),
            ApplicationError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApplicationError::InternalError(ref msg) => {
                error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
