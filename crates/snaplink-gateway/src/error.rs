use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snaplink_shortener::ShortenerError;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::ErrorResponse;
use crate::qr::QrError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("request body has no usable url")]
    UrlRequired,
    #[error("request body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
    #[error(transparent)]
    Qr(#[from] QrError),
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::UrlRequired => (StatusCode::BAD_REQUEST, "URL is required."),
            AppError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid JSON body."),
            AppError::Shortener(e) if e.is_client_error() => {
                (StatusCode::BAD_REQUEST, "URL is required.")
            }
            AppError::Shortener(_) | AppError::Qr(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            error!(error = %self, status = %status, "request failed");
        } else {
            debug!(error = %self, status = %status, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}
