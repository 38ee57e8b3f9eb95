//! Key-value store backends.
//!
//! Provides two implementations of [`crate::domain::store::KvStore`]:
//! - [`RedisStore`] - Production Redis backend
//! - [`MemoryStore`] - In-process map for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
