//! HTTP request handlers for API endpoints.

pub mod health;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use redirect::{redirect_handler, redirect_without_code_handler};
pub use shorten::shorten_handler;
