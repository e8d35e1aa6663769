//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{LinkRegistry, LinkResolver};
use crate::domain::repositories::LinkStore;
use crate::utils::id_generator::IdGenerator;

/// Handler-visible services, built over trait objects so any store backend
/// (PostgreSQL in production, in-memory in tests) can be plugged in.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<LinkRegistry<dyn LinkStore, dyn IdGenerator>>,
    pub resolver: Arc<LinkResolver<dyn LinkStore>>,
}

impl AppState {
    /// Wires the services around the given store and generator.
    pub fn new(store: Arc<dyn LinkStore>, generator: Arc<dyn IdGenerator>, max_attempts: u32) -> Self {
        Self {
            registry: Arc::new(LinkRegistry::with_max_attempts(
                Arc::clone(&store),
                generator,
                max_attempts,
            )),
            resolver: Arc::new(LinkResolver::new(store)),
        }
    }
}
