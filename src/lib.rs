//! # Shortlink
//!
//! A short-link service that hands out opaque, expiring codes for long URLs,
//! built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the store contract and the error taxonomy
//! - **Application Layer** ([`application`]) - Code allocation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Flow
//!
//! A create request asks [`application::services::LinkAllocator`] for a code:
//! it generates a random candidate, checks it against the store, and claims it
//! with an atomic set-if-absent carrying the TTL, retrying on collisions within
//! a bounded budget. A redirect asks [`application::services::RedirectResolver`]
//! for the URL and answers `302 Found`, `404` once the record has expired, or
//! `500` if the store is unavailable.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//!
//! curl -X POST localhost:8080/v1/links/shorten \
//!      -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com", "exp": 600}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkAllocator, RedirectResolver};
    pub use crate::domain::entities::{ShortCode, ShortLink};
    pub use crate::domain::repositories::LinkStore;
    pub use crate::domain::{Deadline, LinkError, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
