//! Redis-backed key-value store.

use crate::domain::store::{KvStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Redis implementation of [`KvStore`].
///
/// Uses a `ConnectionManager`, which reconnects on its own and is cheap to
/// clone per operation. Unlike a cache, errors are not swallowed: a failed or
/// slow Redis call surfaces as a [`StoreError`].
pub struct RedisStore {
    conn: ConnectionManager,
    key_prefix: String,
    op_timeout: Duration,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Prepended to every key; empty keeps the namespace flat
    /// - `op_timeout` - Upper bound for each individual Redis round trip
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(
        redis_url: &str,
        key_prefix: impl Into<String>,
        op_timeout: Duration,
    ) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let conn = tokio::time::timeout(op_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Unavailable("Redis connection timed out".to_string()))?
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            conn,
            key_prefix: key_prefix.into(),
            op_timeout,
        };

        store.ping().await.map_err(|e| StoreError::Unavailable(e.to_string()))?;

        info!("Connected to Redis");

        Ok(store)
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    /// Runs one Redis command under the configured timeout.
    async fn bounded<T>(
        &self,
        operation: &str,
        fut: impl Future<Output = redis::RedisResult<T>>,
    ) -> StoreResult<T> {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(StoreError::Backend(format!("{operation}: {e}"))),
            Err(_) => Err(StoreError::Timeout(format!(
                "{operation} exceeded {}ms",
                self.op_timeout.as_millis()
            ))),
        }
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.conn.clone();

        let value = self
            .bounded("GET", conn.get::<_, Option<String>>(&full_key))
            .await?;

        debug!(key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.conn.clone();

        self.bounded("SET", conn.set::<_, _, ()>(&full_key, value))
            .await?;

        debug!(key, "Redis SET");
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        self.bounded("PING", conn.ping::<()>()).await
    }
}
