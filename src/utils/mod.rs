//! Utility functions for identifier generation and URL validation.
//!
//! - [`id_generator`] - Short identifier generation
//! - [`url_validator`] - Target URL validation

pub mod id_generator;
pub mod url_validator;
