//! Top-level router configuration.
//!
//! # Route Structure
//!
//! The service has a single endpoint; dispatch is by method, on `/` and on
//! every path below it:
//!
//! - `OPTIONS /*` - CORS preflight
//! - `POST    /*` - Create a short link (password protected)
//! - anything else - Redirect `/{key}` to its target, or to the default URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::{preflight_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{MethodRouter, post};

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", endpoint())
        .route("/{*path}", endpoint())
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Method dispatch shared by every path.
fn endpoint() -> MethodRouter<AppState> {
    post(shorten_handler)
        .options(preflight_handler)
        .fallback(redirect_handler)
}
