//! Business logic services for the application layer.

pub mod link_allocator;
pub mod redirect_resolver;

pub use link_allocator::LinkAllocator;
pub use redirect_resolver::RedirectResolver;
