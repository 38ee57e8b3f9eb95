#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;

use kv_shortener::application::services::LinkService;
use kv_shortener::domain::store::{KvStore, StoreError, StoreResult};
use kv_shortener::infrastructure::store::MemoryStore;
use kv_shortener::routes::app_router;
use kv_shortener::state::{AppState, Settings};
use kv_shortener::utils::key_generator::SAFE_ALPHABET;

pub const PASSWORD: &str = "test-password";
pub const DEFAULT_URL: &str = "https://default.example.com/";

/// Store whose every operation fails, for exercising the 500 path.
pub struct FailingStore;

#[async_trait]
impl KvStore for FailingStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn put(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub fn create_test_state(store: Arc<dyn KvStore>, dedup_enabled: bool) -> AppState {
    let link_service = Arc::new(LinkService::new(store));
    let settings = Settings::new(DEFAULT_URL, PASSWORD, dedup_enabled).unwrap();

    AppState::new(link_service, settings)
}

/// Test server over a fresh in-memory store.
pub fn create_test_server(dedup_enabled: bool) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = create_test_state(store.clone(), dedup_enabled);

    (TestServer::new(app_router(state)).unwrap(), store)
}

/// Test server whose store always fails.
pub fn create_failing_server() -> TestServer {
    let state = create_test_state(Arc::new(FailingStore), true);
    TestServer::new(app_router(state)).unwrap()
}

/// Asserts `key` looks like `/XXXXXX` and returns the bare key.
pub fn assert_short_key(key: &str) -> &str {
    let bare = key.strip_prefix('/').expect("key starts with '/'");
    assert_eq!(bare.len(), 6, "unexpected key length: {key}");
    assert!(
        bare.bytes().all(|b| SAFE_ALPHABET.contains(&b)),
        "key outside the safe alphabet: {key}"
    );
    bare
}

/// Asserts the default header set is present.
pub fn assert_default_headers(response: &axum_test::TestResponse) {
    let headers = response.headers();
    assert_eq!(headers["content-type"], "text/html;charset=UTF-8");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}
