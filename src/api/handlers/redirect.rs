//! Handler for short key redirects.

use axum::{
    extract::State,
    http::{HeaderValue, Uri},
    response::Response,
};
use tracing::warn;

use crate::api::response::found;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `GET /{key}`; every method other than `POST` and `OPTIONS` ends up here.
///
/// # Request Flow
///
/// 1. Take the first path segment (`/abc/def` → `abc`)
/// 2. Empty segment → 302 to the default URL
/// 3. Unknown key → 302 to the default URL
/// 4. Known key → 302 to the stored URL
///
/// Unknown keys are never a 404.
///
/// # Errors
///
/// Returns 500 if the store fails.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let key = first_segment(uri.path());

    if key.is_empty() {
        return Ok(found(state.settings.default_redirect.clone()));
    }

    let location = match state.link_service.resolve(key).await? {
        Some(target) => HeaderValue::from_str(&target).unwrap_or_else(|_| {
            warn!(key, "Stored URL is not a valid Location header, using default");
            state.settings.default_redirect.clone()
        }),
        None => state.settings.default_redirect.clone(),
    };

    Ok(found(location))
}

/// First segment after the leading slash, empty if there is none.
fn first_segment(path: &str) -> &str {
    path.split('/').nth(1).unwrap_or_default()
}
