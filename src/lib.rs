//! # KV Shortener
//!
//! A small URL shortening service over a key-value store, built with Axum and Redis.
//!
//! ## Architecture
//!
//! The crate keeps the layer separation of a larger service, scaled down:
//!
//! - **Domain Layer** ([`domain`]) - The key-value store contract
//! - **Application Layer** ([`application`]) - Key allocation, dedup and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Handlers, DTOs, response shaping and tracing
//!
//! ## Behaviour
//!
//! - `POST /` with `{"password": "...", "url": "..."}` returns `{"status":200,"key":"/AbC234"}`
//! - `GET /AbC234` answers 302 to the stored URL
//! - `GET /` and unknown keys answer 302 to the configured default URL
//! - `OPTIONS` answers the CORS preflight
//!
//! With deduplication on, a URL that was already shortened gets its existing
//! key back. Its SHA-512 digest is stored next to the forward mapping.
//!
//! ## Quick Start
//!
//! ```bash
//! export API_PASSWORD="change-me"
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory otherwise
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::store::{KvStore, StoreError, StoreResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::routes::app_router;
    pub use crate::state::{AppState, Settings};
}
