//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs use a separate struct (`NewLink`) so the store alone decides
//! store-assigned fields such as the creation timestamp.

pub mod link;

pub use link::{Link, NewLink};
