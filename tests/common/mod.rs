#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use shortlink::domain::StoreError;
use shortlink::domain::repositories::LinkStore;
use shortlink::infrastructure::store::MemoryStore;
use shortlink::routes::router;
use shortlink::state::{AppState, LinkSettings, ServiceInfo};

pub const TEST_DEFAULT_TTL: u64 = 3600;

/// A store whose backend is unreachable.
pub struct FailingStore;

#[async_trait]
impl LinkStore for FailingStore {
    async fn exists(&self, _code: &str) -> Result<bool, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn set_if_absent(
        &self,
        _code: &str,
        _url: &str,
        _ttl_seconds: u64,
    ) -> Result<bool, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn get(&self, _code: &str) -> Result<String, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

pub fn create_test_state(store: Arc<dyn LinkStore>) -> AppState {
    AppState::new(
        store,
        8,
        LinkSettings {
            default_ttl_seconds: TEST_DEFAULT_TTL,
            retry_budget: 5,
            request_timeout: Duration::from_secs(2),
        },
        ServiceInfo {
            service_name: "shortlink-test".to_string(),
            instance_id: "test-instance".to_string(),
        },
    )
}

pub fn memory_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (create_test_state(store.clone()), store)
}

pub fn test_app(state: AppState) -> Router {
    router(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_app(state)).unwrap()
}
