//! DTOs for link creation and listing endpoints.

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a short link.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// Optional human-readable label for the link.
    pub title: Option<String>,

    /// The target URL (must be an absolute HTTP/HTTPS URL).
    pub url: String,
}

/// A persisted link as returned to API clients.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub short_id: String,
    pub title: Option<String>,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            short_id: link.short_id,
            title: link.title,
            target_url: link.target_url,
            created_at: link.created_at,
        }
    }
}

/// Response for the link listing endpoint.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub links: Vec<LinkResponse>,
}
