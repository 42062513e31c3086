//! In-process link store.

use crate::domain::StoreError;
use crate::domain::repositories::LinkStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct Entry {
    url: String,
    /// `None` when the TTL is too large to represent; such entries never expire.
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// A link store held in process memory.
///
/// Expiry is evaluated lazily against the tokio clock, so tests can pause and
/// advance time. Records do not survive a restart and are not shared between
/// processes.
///
/// # Use Cases
///
/// - Development without Redis (`STORE_BACKEND=memory`)
/// - Tests of the HTTP layer and of TTL behaviour
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (records are not persisted)");
        Self::default()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock().values().filter(|e| e.is_live(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        let now = Instant::now();
        Ok(self.lock().get(code).is_some_and(|e| e.is_live(now)))
    }

    async fn set_if_absent(
        &self,
        code: &str,
        url: &str,
        ttl_seconds: u64,
    ) -> Result<bool, StoreError> {
        let now = Instant::now();
        let mut entries = self.lock();

        if entries.get(code).is_some_and(|e| e.is_live(now)) {
            return Ok(false);
        }

        entries.insert(
            code.to_string(),
            Entry {
                url: url.to_string(),
                expires_at: now.checked_add(Duration::from_secs(ttl_seconds)),
            },
        );
        Ok(true)
    }

    async fn get(&self, code: &str) -> Result<String, StoreError> {
        let now = Instant::now();
        let mut entries = self.lock();

        match entries.get(code) {
            Some(entry) if entry.is_live(now) => Ok(entry.url.clone()),
            Some(_) => {
                entries.remove(code);
                Err(StoreError::NotFound)
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
