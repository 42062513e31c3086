//! Storage trait definitions for the domain layer.
//!
//! The core talks to storage only through these traits. Implementations live
//! in `crate::infrastructure::store`; mocks are generated with `mockall` for
//! unit tests.
//!
//! - [`LinkStore`] - TTL key-value store for short-link records

pub mod link_store;

pub use link_store::LinkStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
