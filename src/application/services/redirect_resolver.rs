//! Short code resolution.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, error};

use crate::domain::repositories::LinkStore;
use crate::domain::{Deadline, LinkError, StoreError};

/// Resolves short codes to their target URLs.
///
/// Read-only: no counters on the record, no caching beyond the store.
pub struct RedirectResolver<S: LinkStore + ?Sized> {
    store: Arc<S>,
}

impl<S: LinkStore + ?Sized> RedirectResolver<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Looks up the URL behind `raw_code`.
    ///
    /// Leading `/` separators left over from wildcard routing are stripped
    /// before the lookup.
    ///
    /// # Errors
    ///
    /// - [`LinkError::Validation`] if the code is empty, without a store call
    /// - [`LinkError::NotFound`] if the code never existed or has expired
    /// - [`LinkError::Storage`] on any other store failure, including the deadline passing
    pub async fn resolve(&self, raw_code: &str, deadline: Deadline) -> Result<String, LinkError> {
        let code = raw_code.trim_start_matches('/');

        if code.is_empty() {
            return Err(LinkError::validation("code parameter is required"));
        }

        match deadline.run(self.store.get(code)).await {
            Ok(url) => {
                counter!("shortlink_resolutions_total", "outcome" => "hit").increment(1);
                debug!(code, "Short link resolved");
                Ok(url)
            }
            Err(StoreError::NotFound) => {
                counter!("shortlink_resolutions_total", "outcome" => "miss").increment(1);
                debug!(code, "Short link not found");
                Err(LinkError::NotFound)
            }
            Err(e) => {
                counter!("shortlink_resolutions_total", "outcome" => "error").increment(1);
                error!(code, error = %e, "Short link lookup failed");
                Err(LinkError::Storage(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use std::time::Duration;

    fn deadline() -> Deadline {
        Deadline::after(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .withf(|code| code == "aB3xY9zQ")
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let resolver = RedirectResolver::new(Arc::new(store));
        let url = resolver.resolve("aB3xY9zQ", deadline()).await.unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_strips_leading_separator() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .withf(|code| code == "aB3xY9zQ")
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let resolver = RedirectResolver::new(Arc::new(store));
        let result = resolver.resolve("/aB3xY9zQ", deadline()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_empty_code_touches_no_store() {
        let mut store = MockLinkStore::new();
        store.expect_get().times(0);

        let resolver = RedirectResolver::new(Arc::new(store));

        for raw in ["", "/", "//"] {
            let result = resolver.resolve(raw, deadline()).await;
            assert!(matches!(result, Err(LinkError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_resolve_miss_is_not_found() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let resolver = RedirectResolver::new(Arc::new(store));
        let result = resolver.resolve("doesnotexist", deadline()).await;

        assert!(matches!(result, Err(LinkError::NotFound)));
    }

    #[tokio::test]
    async fn test_resolve_backend_failure_is_storage_error() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::backend("connection refused")));

        let resolver = RedirectResolver::new(Arc::new(store));
        let result = resolver.resolve("aB3xY9zQ", deadline()).await;

        assert!(matches!(result, Err(LinkError::Storage(_))));
    }

    #[tokio::test]
    async fn test_resolve_is_repeatable() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(2)
            .returning(|_| Ok("https://example.com/a".to_string()));

        let resolver = RedirectResolver::new(Arc::new(store));
        let first = resolver.resolve("code1234", deadline()).await.unwrap();
        let second = resolver.resolve("code1234", deadline()).await.unwrap();

        assert_eq!(first, second);
    }
}
