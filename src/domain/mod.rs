//! Domain layer: the storage contract the link service is written against.
//!
//! The concrete backends live in [`crate::infrastructure::store`]; the domain
//! layer only knows the [`store::KvStore`] trait and its error type.

pub mod store;

pub use store::{KvStore, StoreError, StoreResult};

#[cfg(test)]
pub use store::MockKvStore;
