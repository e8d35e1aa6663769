//! Store trait for short link persistence.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Durable, uniquely-keyed mapping from short identifier to link record.
///
/// The store owns the uniqueness guarantee: `insert_unique` must be atomic
/// under concurrency, enforced by the backing engine itself (e.g. a unique
/// index), never by application-level locking, because callers may live in
/// independent processes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL backend
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-process backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Atomic check-and-insert of a new link.
    ///
    /// Of any number of simultaneous calls bearing the same `short_id`,
    /// exactly one succeeds; the rest observe [`AppError::DuplicateKey`] and
    /// no mutation. No partially written record is ever observable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if a record with the same
    /// `short_id` already exists.
    /// Returns [`AppError::Storage`] on backend failures.
    async fn insert_unique(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    async fn get_by_id(&self, short_id: &str) -> Result<Option<Link>, AppError>;

    /// Lazily scans all persisted links.
    ///
    /// The stream is finite and restartable; calling `list_all` again starts
    /// a fresh scan. Ordering is whatever the backing engine provides.
    fn list_all(&self) -> BoxStream<'static, Result<Link, AppError>>;
}
