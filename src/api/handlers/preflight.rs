//! Handler for CORS preflight requests.

use axum::response::Response;

use crate::api::response::empty_response;

/// Answers a CORS preflight.
///
/// # Endpoint
///
/// `OPTIONS /` (any path)
///
/// Always 200 with an empty body and the default CORS headers; nothing is
/// read or written.
pub async fn preflight_handler() -> Response {
    empty_response()
}
