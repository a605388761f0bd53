use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use codechat_store::StoreError;

use crate::api::AckResponse;

/// Everything a handler can fail with.
///
/// Clients tell success from failure by the `success` field alone, so every
/// variant is answered with `200 OK` and `{"success": false, "message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(StoreError::CodeSpaceExhausted { .. }) => {
                tracing::error!(error = %self, "Registration failed");
            }
            ApiError::Store(_) => {
                tracing::debug!(error = %self, "Request rejected");
            }
            ApiError::BadRequest(_) => {
                tracing::debug!(error = %self, "Malformed request");
            }
        }

        (StatusCode::OK, axum::Json(AckResponse::fail(self.to_string()))).into_response()
    }
}
