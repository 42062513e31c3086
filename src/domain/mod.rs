//! Domain layer: short-link entities, the store contract and the error taxonomy.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait definitions
//! - [`error`] - [`error::StoreError`] and [`error::LinkError`]
//! - [`deadline`] - Request-scoped deadline for store calls
//!
//! The domain layer has no dependency on HTTP or on a particular store.
//! Services that orchestrate it live in [`crate::application::services`].

pub mod deadline;
pub mod entities;
pub mod error;
pub mod repositories;

pub use deadline::Deadline;
pub use error::{LinkError, StoreError};
