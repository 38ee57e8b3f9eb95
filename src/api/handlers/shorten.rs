//! Handler for link creation.

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use tracing::{debug, warn};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::response::text_response;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::is_valid_url;

/// Creates (or, with dedup enabled, reuses) a short key for a URL.
///
/// # Endpoint
///
/// `POST /` (any path)
///
/// # Request Body
///
/// ```json
/// { "password": "your_secure_password", "url": "https://example.com/a" }
/// ```
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
///
/// # Response
///
/// ```json
/// { "status": 200, "key": "/AbC234" }
/// ```
///
/// # Errors
///
/// Checks run in this order, the first failure wins:
///
/// - 400 `Bad Request: Invalid JSON.` if the body is not a JSON object
/// - 401 `Unauthorized: Invalid password.` if the password does not match
/// - 400 `Bad Request: Invalid URL.` if the URL fails validation
/// - 500 if the store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: ShortenRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidBody(e.to_string()))?;

    if payload.password.as_deref() != Some(state.settings.api_password.as_str()) {
        warn!("Rejected link creation: invalid password");
        return Err(AppError::Unauthorized);
    }

    let url = payload
        .url
        .filter(|url| is_valid_url(url))
        .ok_or(AppError::InvalidUrl)?;

    let key = state
        .link_service
        .save_url(&url, state.settings.dedup_enabled)
        .await?;

    debug!(key = %key, "Link created");

    Ok(text_response(StatusCode::OK, &ShortenResponse::created(&key)))
}
