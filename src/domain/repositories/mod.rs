//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete backends live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod link_store;

pub use link_store::LinkStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
