//! Utility functions for code generation and input checking.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Target URL validation

pub mod code_generator;
pub mod url_validator;
