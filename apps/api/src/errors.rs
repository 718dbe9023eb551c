use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::essay::quality::EssayError;
use crate::matching::validation::FieldError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Recommendation endpoint failures never reach this type: they are recovered
/// by falling back to local evaluation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Please fix the errors in the form")]
    InvalidForm(Vec<FieldError>),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Essay(#[from] EssayError),

    #[error("Profile store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "code": "NOT_FOUND", "message": msg }),
            ),
            AppError::InvalidForm(fields) => (
                StatusCode::BAD_REQUEST,
                json!({ "code": "VALIDATION_ERROR", "message": message, "fields": fields }),
            ),
            AppError::InvalidBody(rejection) => (
                rejection.status(),
                json!({ "code": "INVALID_BODY", "message": rejection.body_text() }),
            ),
            AppError::Essay(EssayError::TooShort { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "code": "ESSAY_TOO_SHORT", "message": message }),
            ),
            AppError::Store(e) => {
                tracing::error!("Profile store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "code": "STORE_ERROR", "message": "Saved profile is unavailable" }),
                )
            }
        };

        (status, Json(json!({ "error": body }))).into_response()
    }
}

/// `Json` extractor whose rejections use the same error envelope as every
/// other failure instead of axum's plain-text body.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
