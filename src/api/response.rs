//! Response builders shared by the handlers.
//!
//! Non-redirect responses always carry the same header set: an HTML content
//! type (even for JSON bodies, which is what existing clients expect) and
//! permissive CORS headers. Redirects carry only `Location`.

use axum::{
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Headers attached to every non-redirect response.
pub const DEFAULT_HEADERS: [(HeaderName, &str); 4] = [
    (header::CONTENT_TYPE, "text/html;charset=UTF-8"),
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Serializes `body` as JSON text with the default header set.
pub fn text_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string(body) {
        Ok(json) => (status, DEFAULT_HEADERS, json).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            (StatusCode::INTERNAL_SERVER_ERROR, DEFAULT_HEADERS).into_response()
        }
    }
}

/// Empty 200 response with the default header set.
pub fn empty_response() -> Response {
    (StatusCode::OK, DEFAULT_HEADERS).into_response()
}

/// 302 Found pointing at `location`.
pub fn found(location: HeaderValue) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
