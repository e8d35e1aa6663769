//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted short link.
///
/// Maps an immutable short identifier to its target URL. Records are
/// write-once: every field is fixed at insert time and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    /// Fixed-length identifier, the primary key of the record.
    pub short_id: String,
    pub title: Option<String>,
    pub target_url: String,
    /// Assigned by the store at insert time.
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        short_id: String,
        title: Option<String>,
        target_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            short_id,
            title,
            target_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// Carries everything except `created_at`, which the store assigns.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_id: String,
    pub title: Option<String>,
    pub target_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc123XY".to_string(),
            Some("Example".to_string()),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.short_id, "abc123XY");
        assert_eq!(link.title.as_deref(), Some("Example"));
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_link_without_title() {
        let link = Link::new(
            "xyz789ab".to_string(),
            None,
            "https://rust-lang.org".to_string(),
            Utc::now(),
        );

        assert!(link.title.is_none());
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            short_id: "xyz789ab".to_string(),
            title: None,
            target_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.short_id, "xyz789ab");
        assert_eq!(new_link.target_url, "https://rust-lang.org");
    }
}
