//! Link creation service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::id_generator::IdGenerator;
use crate::utils::url_validator::validate_target_url;
use serde_json::json;

/// Default number of generate+insert attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Orchestrates identifier generation and persistence of new links.
///
/// The registry holds no record state of its own; the store's atomic
/// check-and-insert is the only mechanism that can detect a race between
/// concurrent creators. A bounded retry converts the rare generator
/// collision into transparent success while keeping worst-case latency
/// bounded.
pub struct LinkRegistry<S: LinkStore + ?Sized, G: IdGenerator + ?Sized> {
    store: Arc<S>,
    generator: Arc<G>,
    max_attempts: u32,
}

impl<S, G> LinkRegistry<S, G>
where
    S: LinkStore + ?Sized,
    G: IdGenerator + ?Sized,
{
    /// Creates a registry with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(store: Arc<S>, generator: Arc<G>) -> Self {
        Self::with_max_attempts(store, generator, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a registry with an explicit retry budget.
    pub fn with_max_attempts(store: Arc<S>, generator: Arc<G>, max_attempts: u32) -> Self {
        Self {
            store,
            generator,
            max_attempts,
        }
    }

    /// Creates and persists a new short link.
    ///
    /// The target URL is validated before the generator or store is touched,
    /// so a rejected request has no side effects. Each attempt draws a fresh
    /// candidate identifier; only a duplicate-key outcome is retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or malformed target URL.
    /// Returns [`AppError::ExhaustedRetries`] when `max_attempts` consecutive
    /// candidates collided, which signals keyspace misconfiguration rather
    /// than an ordinary storage failure.
    /// Returns [`AppError::Generation`] or [`AppError::Storage`] unchanged
    /// from the generator and store.
    pub async fn create_link(
        &self,
        title: Option<String>,
        target_url: String,
    ) -> Result<Link, AppError> {
        validate_target_url(&target_url).map_err(|e| {
            AppError::bad_request("Invalid target URL", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=self.max_attempts {
            let short_id = self.generator.generate()?;

            let new_link = NewLink {
                short_id,
                title: title.clone(),
                target_url: target_url.clone(),
            };

            match self.store.insert_unique(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::DuplicateKey { .. }) => {
                    tracing::debug!(attempt, "short id collision, retrying with a fresh id");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::exhausted_retries(
            "Could not allocate a unique short id",
            json!({ "attempts": self.max_attempts }),
        ))
    }
}
