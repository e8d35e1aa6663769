//! Handlers for link creation and listing.

use axum::{Json, extract::State, http::StatusCode};
use futures::TryStreamExt;

use crate::api::dto::{CreateLinkRequest, LinkListResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "title": "docs", "url": "https://example.com/docs" }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity for an empty or malformed URL.
/// Returns 500 Internal Server Error when the identifier keyspace is
/// exhausted or the store fails.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state
        .registry
        .create_link(payload.title, payload.url)
        .await?;

    tracing::info!(short_id = %link.short_id, "short link created");

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all persisted links.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links: Vec<LinkResponse> = state
        .resolver
        .list_links()
        .map_ok(LinkResponse::from)
        .try_collect()
        .await?;

    Ok(Json(LinkListResponse {
        total: links.len(),
        links,
    }))
}
