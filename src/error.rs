use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid score")]
    InvalidScore,

    #[error("Invalid frame data")]
    InvalidFrameMessage,

    #[error("Unknown button index")]
    UnknownButton(Option<i64>),

    #[error("Failed to render template: {0}")]
    Internal(#[from] askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidScore
            | AppError::InvalidFrameMessage
            | AppError::UnknownButton(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal details stay in the log
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            tracing::debug!("Rejected request: {}", self);
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
