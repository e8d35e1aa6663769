//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its target URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Returns 308 Permanent Redirect on a hit; targets are immutable, so the
/// mapping never changes once it exists.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier was never allocated.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target_url = state.resolver.resolve(&short_id).await?;

    tracing::debug!(%short_id, "redirecting");

    Ok(Redirect::permanent(&target_url))
}
