//! Data Transfer Objects for request/response serialization.

pub mod links;

pub use links::{CreateLinkRequest, LinkListResponse, LinkResponse};
