//! Infrastructure layer: concrete storage backends.
//!
//! - [`store`] - Redis and in-memory implementations of the link store

pub mod store;
