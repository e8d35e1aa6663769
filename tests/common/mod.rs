#![allow(dead_code)]

use std::sync::Arc;

use linkly::infrastructure::persistence::MemoryLinkStore;
use linkly::state::AppState;
use linkly::utils::id_generator::RandomIdGenerator;

/// Builds handler state over the in-memory store backend.
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryLinkStore::new()),
        Arc::new(RandomIdGenerator::default()),
        5,
    )
}
