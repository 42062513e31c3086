//! Store contract for `code → URL` records with a time-to-live.

use crate::domain::error::StoreError;
use async_trait::async_trait;

/// A key-value store that owns the expiration of short-link records.
///
/// Atomicity of [`LinkStore::set_if_absent`] is the only guarantee the
/// allocator relies on for uniqueness: two allocators racing on the same code
/// cannot both win.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis (`SET NX EX`)
/// - [`crate::infrastructure::store::MemoryStore`] - In-process, for development and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Returns whether `code` currently maps to a live record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the store cannot answer.
    async fn exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Writes `code → url` with a TTL only if `code` is absent.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the record was written
    /// - `Ok(false)` if a live record already held the code; nothing changed
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the write failed or its outcome is unknown.
    async fn set_if_absent(&self, code: &str, url: &str, ttl_seconds: u64)
    -> Result<bool, StoreError>;

    /// Reads the URL stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the code was never written or has
    /// expired, and [`StoreError::Backend`] on any other failure.
    async fn get(&self, code: &str) -> Result<String, StoreError>;

    /// Checks that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if it is not.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name for health output and logs.
    fn backend_name(&self) -> &'static str;
}
