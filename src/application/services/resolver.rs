//! Read-only link lookup service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use futures::stream::BoxStream;
use serde_json::json;

/// Resolves short identifiers back to their targets.
///
/// Pure reads with no side effects; any number of concurrent resolutions is
/// safe without coordination beyond what the store provides.
pub struct LinkResolver<S: LinkStore + ?Sized> {
    store: Arc<S>,
}

impl<S: LinkStore + ?Sized> LinkResolver<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a short identifier to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier was never inserted.
    /// Returns [`AppError::Storage`] on backend failures.
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        self.get_link(short_id).await.map(|link| link.target_url)
    }

    /// Retrieves the full record for a short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier was never inserted.
    pub async fn get_link(&self, short_id: &str) -> Result<Link, AppError> {
        self.store.get_by_id(short_id).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "short_id": short_id }))
        })
    }

    /// Streams every persisted record.
    pub fn list_links(&self) -> BoxStream<'static, Result<Link, AppError>> {
        self.store.list_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use chrono::Utc;
    use futures::TryStreamExt;

    fn create_test_link(short_id: &str, url: &str) -> Link {
        Link::new(short_id.to_string(), None, url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_resolve_returns_target_url() {
        let mut mock_store = MockLinkStore::new();

        let link = create_test_link("abc123XY", "https://example.com");
        mock_store
            .expect_get_by_id()
            .withf(|short_id| short_id == "abc123XY")
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let resolver = LinkResolver::new(Arc::new(mock_store));

        let target = resolver.resolve("abc123XY").await.unwrap();
        assert_eq!(target, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_missing_id_is_not_found() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_get_by_id().returning(|_| Ok(None));

        let resolver = LinkResolver::new(Arc::new(mock_store));

        let err = resolver.resolve("missing1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_link_returns_full_record() {
        let mut mock_store = MockLinkStore::new();

        let link = create_test_link("abc123XY", "https://example.com");
        mock_store
            .expect_get_by_id()
            .returning(move |_| Ok(Some(link.clone())));

        let resolver = LinkResolver::new(Arc::new(mock_store));

        let found = resolver.get_link("abc123XY").await.unwrap();
        assert_eq!(found.short_id, "abc123XY");
        assert_eq!(found.target_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_get_by_id()
            .returning(|_| Err(AppError::storage("Database error", json!({}))));

        let resolver = LinkResolver::new(Arc::new(mock_store));

        let err = resolver.resolve("abc123XY").await.unwrap_err();
        assert!(matches!(err, AppError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_list_links_passes_through_store_scan() {
        let mut mock_store = MockLinkStore::new();

        mock_store.expect_list_all().times(1).returning(|| {
            let links = vec![
                Ok(create_test_link("shortid1", "https://example.com/1")),
                Ok(create_test_link("shortid2", "https://example.com/2")),
            ];
            Box::pin(futures::stream::iter(links))
        });

        let resolver = LinkResolver::new(Arc::new(mock_store));

        let links: Vec<Link> = resolver.list_links().try_collect().await.unwrap();
        assert_eq!(links.len(), 2);
    }
}
