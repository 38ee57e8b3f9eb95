//! Link allocation, deduplication and resolution.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::store::KvStore;
use crate::error::AppError;
use crate::utils::fingerprint::fingerprint;
use crate::utils::key_generator::{DEFAULT_KEY_LENGTH, generate_key};

/// Default cap on candidate keys tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Owns the mapping lifecycle in the key-value store.
///
/// Forward mappings (`key -> url`) and dedup mappings (`digest -> key`) share
/// one flat namespace. Both are write-once; nothing here updates or deletes.
pub struct LinkService {
    store: Arc<dyn KvStore>,
    key_length: usize,
    max_attempts: usize,
}

impl LinkService {
    /// Creates a service with the default key length and retry cap.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_key_policy(store, DEFAULT_KEY_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a service with an explicit key length and retry cap.
    ///
    /// `key_length` must stay well away from the 128-character digest length
    /// so short keys and dedup keys cannot collide; configuration enforces
    /// this.
    pub fn with_key_policy(store: Arc<dyn KvStore>, key_length: usize, max_attempts: usize) -> Self {
        Self {
            store,
            key_length,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Length of the keys this service generates.
    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Stores `url` under a freshly generated key and returns the key.
    ///
    /// Each attempt generates a candidate, reads it back, and writes the
    /// forward mapping only if the candidate is free. The read and the write
    /// are separate round trips, so two concurrent writers can in principle
    /// claim the same candidate; with 48^6 keys that is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeySpaceExhausted`] if every attempt collided and
    /// [`AppError::Storage`] if the store fails.
    pub async fn allocate_key(&self, url: &str) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let key = generate_key(self.key_length);

            if self.store.get(&key).await?.is_some() {
                debug!(attempt, key = %key, "Key collision, retrying");
                continue;
            }

            self.store.put(&key, url).await?;
            debug!(key = %key, "Allocated key");
            return Ok(key);
        }

        error!(
            attempts = self.max_attempts,
            "Could not find a free key; the namespace is full or the store is inconsistent"
        );

        Err(AppError::KeySpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Returns a key for `url`, reusing an existing one when dedup is enabled.
    ///
    /// With dedup enabled:
    ///
    /// 1. Look up `fingerprint(url)`; a hit returns the stored key and writes
    ///    nothing.
    /// 2. Otherwise allocate a key (forward mapping written).
    /// 3. Then write `fingerprint(url) -> key`.
    ///
    /// Steps 2 and 3 are two independent writes. If step 3 fails the forward
    /// mapping stays behind without a dedup entry and the error is returned;
    /// the next request for the same URL simply allocates a new key.
    ///
    /// With dedup disabled every call allocates a new key.
    ///
    /// # Errors
    ///
    /// See [`Self::allocate_key`].
    pub async fn save_url(&self, url: &str, dedup_enabled: bool) -> Result<String, AppError> {
        if !dedup_enabled {
            return self.allocate_key(url).await;
        }

        let digest = fingerprint(url);

        if let Some(existing) = self.store.get(&digest).await? {
            debug!(key = %existing, "Dedup hit");
            return Ok(existing);
        }

        let key = self.allocate_key(url).await?;
        self.store.put(&digest, &key).await?;

        Ok(key)
    }

    /// Looks up the target URL for `key`.
    ///
    /// Returns `Ok(None)` for unknown keys; an empty stored value is treated
    /// the same way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store fails.
    pub async fn resolve(&self, key: &str) -> Result<Option<String>, AppError> {
        let target = self.store.get(key).await?;
        Ok(target.filter(|url| !url.is_empty()))
    }

    /// Checks that the backing store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the ping fails.
    pub async fn ping_store(&self) -> Result<(), AppError> {
        Ok(self.store.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::{MockKvStore, StoreError};
    use crate::infrastructure::store::MemoryStore;
    use crate::utils::key_generator::SAFE_ALPHABET;
    use mockall::Sequence;
    use std::collections::HashSet;

    const URL: &str = "https://example.com/a";

    fn memory_service() -> (LinkService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (LinkService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_allocate_key_success() {
        let mut mock_store = MockKvStore::new();

        mock_store
            .expect_get()
            .withf(|key| key.len() == 6)
            .times(1)
            .returning(|_| Ok(None));

        mock_store
            .expect_put()
            .withf(|key, value| key.len() == 6 && value == URL)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store));

        let key = service.allocate_key(URL).await.unwrap();
        assert_eq!(key.len(), 6);
        assert!(key.bytes().all(|b| SAFE_ALPHABET.contains(&b)));
    }

    #[tokio::test]
    async fn test_allocate_key_retries_on_collision() {
        let mut mock_store = MockKvStore::new();

        let mut reads = 0;
        mock_store.expect_get().times(3).returning(move |_| {
            reads += 1;
            if reads < 3 {
                Ok(Some("https://taken.example.com".to_string()))
            } else {
                Ok(None)
            }
        });

        mock_store
            .expect_put()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store));

        assert!(service.allocate_key(URL).await.is_ok());
    }

    #[tokio::test]
    async fn test_allocate_key_gives_up_after_max_attempts() {
        let mut mock_store = MockKvStore::new();

        mock_store
            .expect_get()
            .times(4)
            .returning(|_| Ok(Some("https://taken.example.com".to_string())));

        mock_store.expect_put().times(0);

        let service = LinkService::with_key_policy(Arc::new(mock_store), 6, 4);

        let result = service.allocate_key(URL).await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::KeySpaceExhausted { attempts: 4 }
        ));
    }

    #[tokio::test]
    async fn test_allocate_key_propagates_store_error() {
        let mut mock_store = MockKvStore::new();

        mock_store
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("connection refused".to_string())));

        mock_store.expect_put().times(0);

        let service = LinkService::new(Arc::new(mock_store));

        let result = service.allocate_key(URL).await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::Storage(StoreError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_allocate_key_respects_key_length() {
        let mut mock_store = MockKvStore::new();

        mock_store
            .expect_get()
            .withf(|key| key.len() == 10)
            .times(1)
            .returning(|_| Ok(None));
        mock_store
            .expect_put()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkService::with_key_policy(Arc::new(mock_store), 10, 3);

        assert_eq!(service.allocate_key(URL).await.unwrap().len(), 10);
        assert_eq!(service.key_length(), 10);
    }

    #[tokio::test]
    async fn test_save_url_dedup_hit_writes_nothing() {
        let mut mock_store = MockKvStore::new();

        let digest = fingerprint(URL);
        mock_store
            .expect_get()
            .withf(move |key| key == digest)
            .times(1)
            .returning(|_| Ok(Some("abcdef".to_string())));

        mock_store.expect_put().times(0);

        let service = LinkService::new(Arc::new(mock_store));

        assert_eq!(service.save_url(URL, true).await.unwrap(), "abcdef");
    }

    #[tokio::test]
    async fn test_save_url_dedup_miss_writes_forward_then_digest() {
        let mut mock_store = MockKvStore::new();
        let mut seq = Sequence::new();

        mock_store
            .expect_get()
            .withf(|key| key.len() == 128)
            .times(1)
            .returning(|_| Ok(None));

        mock_store
            .expect_get()
            .withf(|key| key.len() == 6)
            .times(1)
            .returning(|_| Ok(None));

        mock_store
            .expect_put()
            .withf(|key, value| key.len() == 6 && value == URL)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let digest = fingerprint(URL);
        mock_store
            .expect_put()
            .withf(move |key, value| key == digest && value.len() == 6)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store));

        assert_eq!(service.save_url(URL, true).await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_save_url_dedup_entry_failure_is_reported() {
        let mut mock_store = MockKvStore::new();

        mock_store.expect_get().returning(|_| Ok(None));

        mock_store
            .expect_put()
            .withf(|key, _| key.len() == 6)
            .times(1)
            .returning(|_, _| Ok(()));

        mock_store
            .expect_put()
            .withf(|key, _| key.len() == 128)
            .times(1)
            .returning(|_, _| Err(StoreError::Timeout("SET".to_string())));

        let service = LinkService::new(Arc::new(mock_store));

        let result = service.save_url(URL, true).await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::Storage(StoreError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_save_url_without_dedup_skips_fingerprint() {
        let mut mock_store = MockKvStore::new();

        mock_store
            .expect_get()
            .withf(|key| key.len() == 6)
            .times(1)
            .returning(|_| Ok(None));

        mock_store
            .expect_put()
            .withf(|key, _| key.len() == 6)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store));

        assert!(service.save_url(URL, false).await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_round_trip() {
        let (service, _store) = memory_service();

        for url in [
            "https://example.com",
            "http://example.com/path?x=1&y=2",
            "https://sub.domain.example.org/a b%20c",
        ] {
            let key = service.allocate_key(url).await.unwrap();
            assert_eq!(service.resolve(&key).await.unwrap().as_deref(), Some(url));
        }
    }

    #[tokio::test]
    async fn test_resolve_unknown_key() {
        let (service, _store) = memory_service();
        assert_eq!(service.resolve("ZZZZZZ").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_resolve_empty_value_is_not_found() {
        let (service, store) = memory_service();
        store.put("abcdef", "").await.unwrap();

        assert_eq!(service.resolve("abcdef").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_allocated_keys_are_distinct() {
        let (service, store) = memory_service();

        let mut keys = HashSet::new();
        for i in 0..500 {
            let key = service
                .allocate_key(&format!("https://example.com/{i}"))
                .await
                .unwrap();
            assert!(keys.insert(key));
        }

        assert_eq!(store.len().await, 500);
    }

    #[tokio::test]
    async fn test_save_url_dedup_returns_same_key() {
        let (service, store) = memory_service();

        let first = service.save_url(URL, true).await.unwrap();
        let second = service.save_url(URL, true).await.unwrap();
        let third = service.save_url(URL, true).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
        // one forward mapping plus one dedup mapping
        assert_eq!(store.len().await, 2);
        assert_eq!(
            store.get(&fingerprint(URL)).await.unwrap(),
            Some(first.clone())
        );
    }

    #[tokio::test]
    async fn test_save_url_without_dedup_returns_new_keys() {
        let (service, store) = memory_service();

        let first = service.save_url(URL, false).await.unwrap();
        let second = service.save_url(URL, false).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(&fingerprint(URL)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ping_store() {
        let (service, _store) = memory_service();
        assert!(service.ping_store().await.is_ok());
    }
}
