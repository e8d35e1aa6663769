//! In-process implementation of the link store.
//!
//! Backs tests and single-process deployments. The same insert-uniqueness
//! contract as the PostgreSQL store, enforced by a map guarded by a write
//! lock held across the check-and-insert.

use async_stream::try_stream;
use async_trait::async_trait;
use chrono::Utc;
use futures::stream::BoxStream;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// In-memory store keyed by short identifier.
#[derive(Default)]
pub struct MemoryLinkStore {
    links: Arc<RwLock<HashMap<String, Link>>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert_unique(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&new_link.short_id) {
            return Err(AppError::duplicate_key(
                "Unique constraint violation",
                json!({ "short_id": new_link.short_id }),
            ));
        }

        let link = Link::new(
            new_link.short_id.clone(),
            new_link.title,
            new_link.target_url,
            Utc::now(),
        );
        links.insert(new_link.short_id, link.clone());

        Ok(link)
    }

    async fn get_by_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(short_id).cloned())
    }

    fn list_all(&self) -> BoxStream<'static, Result<Link, AppError>> {
        let links = Arc::clone(&self.links);

        Box::pin(try_stream! {
            // Snapshot under the read lock; the stream itself never holds it.
            let snapshot: Vec<Link> = links.read().await.values().cloned().collect();
            for link in snapshot {
                yield link;
            }
        })
    }
}
