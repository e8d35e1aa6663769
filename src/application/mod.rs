//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a clean API for HTTP
//! handlers:
//!
//! - [`services::registry::LinkRegistry`] - short link creation
//! - [`services::resolver::LinkResolver`] - read-only lookup and listing

pub mod services;
