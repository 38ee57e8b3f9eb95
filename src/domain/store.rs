//! Key-value store contract.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a key-value store backend.
///
/// Every variant is fatal for the request that hit it.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store operation failed: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Flat string-to-string namespace holding both forward mappings
/// (`key -> url`) and dedup mappings (`digest -> key`).
///
/// Implementations provide atomic single-key reads and writes. There are no
/// multi-key transactions and no conditional writes; callers check for
/// existence before writing.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis backend
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it does not
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Checks that the backend answers.
    async fn ping(&self) -> StoreResult<()>;
}
