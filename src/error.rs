//! Request-level error type and its HTTP rendering.
//!
//! Every error becomes a `{"status":N,"msg":"..."}` body carrying the default
//! response header set, so browser clients see the CORS headers even on
//! failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::shorten::MessageBody;
use crate::api::response::text_response;
use crate::domain::store::StoreError;

/// Errors surfaced by the write path and the link service.
#[derive(Debug, Error)]
pub enum AppError {
    /// The supplied password does not match the configured one.
    #[error("invalid password")]
    Unauthorized,

    /// The supplied URL failed validation.
    #[error("invalid URL")]
    InvalidUrl,

    /// The request body is not a JSON object.
    #[error("request body is not a JSON object: {0}")]
    InvalidBody(String),

    /// Every candidate key collided with an existing entry.
    #[error("no free key after {attempts} attempts")]
    KeySpaceExhausted { attempts: usize },

    /// The key-value store failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl AppError {
    /// HTTP status the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidUrl | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::KeySpaceExhausted { .. } | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message. Internal details stay in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "Unauthorized: Invalid password.",
            AppError::InvalidUrl => "Bad Request: Invalid URL.",
            AppError::InvalidBody(_) => "Bad Request: Invalid JSON.",
            AppError::KeySpaceExhausted { .. } | AppError::Storage(_) => {
                "Internal Server Error: Storage failure."
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = MessageBody {
            status: status.as_u16(),
            msg: self.message(),
        };

        text_response(status, &body)
    }
}
