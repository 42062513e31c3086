//! Request-scoped deadline threaded through every store call.

use super::error::StoreError;
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, timeout_at};

/// The point in time by which a request's store work must finish.
///
/// Built once per inbound request and passed down to the allocator and
/// resolver, which bound each store call with it and check it between retry
/// attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Instant);

impl Deadline {
    /// A deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.0
    }

    /// Runs a store call, failing with [`StoreError::Timeout`] once the deadline passes.
    pub async fn run<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        timeout_at(self.0, call)
            .await
            .unwrap_or(Err(StoreError::Timeout))
    }
}
