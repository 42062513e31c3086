//! Core domain entities.
//!
//! - [`ShortCode`] - An opaque code handed out to clients
//! - [`ShortLink`] - The result of a successful allocation

pub mod short_code;
pub mod short_link;

pub use short_code::ShortCode;
pub use short_link::{MAX_TTL_SECONDS, ShortLink};
