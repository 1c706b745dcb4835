//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Literal body returned when a path identifier is not a valid ObjectId.
pub const INVALID_ID_MESSAGE: &str = "Invalid ID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing setting: {0}")]
    Missing(&'static str),
    #[error("invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("driver: {0}")]
    Driver(#[from] mongodb::error::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidId(id) => {
                tracing::debug!(id = %id, "rejected malformed identifier");
                return (StatusCode::BAD_REQUEST, INVALID_ID_MESSAGE).into_response();
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Store(e) => {
                tracing::error!(error = %e, "store call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
