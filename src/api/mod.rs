//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into domain operations:
//!
//! - [`dto`] - Data Transfer Objects
//! - [`handlers`] - HTTP request handlers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod routes;
