//! Concrete link store backends.
//!
//! - [`PgLinkStore`] - PostgreSQL, uniqueness enforced by the primary key
//! - [`MemoryLinkStore`] - in-process map, used by tests and single-node setups

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
