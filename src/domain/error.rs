//! Error taxonomy for the short-link core.
//!
//! [`StoreError`] is what a [`crate::domain::repositories::LinkStore`]
//! implementation reports. [`LinkError`] is the closed set of outcomes the
//! allocator and resolver hand to callers, who match on variants rather than
//! on messages.

/// Errors reported by a link store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key is absent. Expired and never-issued keys look the same.
    #[error("key not found")]
    NotFound,

    /// The call did not complete before the request deadline.
    #[error("store operation timed out")]
    Timeout,

    /// The backend failed or could not be reached.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Outcomes of short-link allocation and resolution.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Client input was rejected before touching the store.
    #[error("{0}")]
    Validation(String),

    /// No free code was secured within the retry budget. Nothing was written.
    #[error("no free short code after {attempts} attempts")]
    CollisionExhausted { attempts: u32 },

    /// The code is absent or has expired.
    #[error("short link not found")]
    NotFound,

    /// The store failed in a way unrelated to collisions.
    #[error("storage error")]
    Storage(#[source] StoreError),
}

impl LinkError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            LinkError::Validation(_) => "validation",
            LinkError::CollisionExhausted { .. } => "collision_exhausted",
            LinkError::NotFound => "not_found",
            LinkError::Storage(_) => "storage",
        }
    }
}
