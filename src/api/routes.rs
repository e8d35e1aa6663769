//! API route configuration.

use crate::api::handlers::{create_link_handler, list_links_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// API routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /links` - Create a short link
/// - `GET  /links` - List all links
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/links", post(create_link_handler).get(list_links_handler))
}
