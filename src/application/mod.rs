//! Application layer services implementing the short-link core.
//!
//! Services take their store as a constructor argument and expose the two
//! operations HTTP handlers and the admin CLI need.
//!
//! # Available Services
//!
//! - [`services::link_allocator::LinkAllocator`] - Collision-avoiding code allocation
//! - [`services::redirect_resolver::RedirectResolver`] - Code to URL resolution

pub mod services;
