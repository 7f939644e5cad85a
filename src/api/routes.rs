//! Registry API route configuration.

use crate::api::handlers::redirect_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Registry routes. `GET` routes also answer `HEAD`.
///
/// # Endpoints
///
/// - `GET /v2`          - API version check, always redirected upstream
/// - `GET /v2/{*path}`  - Blobs go to the nearest bucket when present there,
///   everything else (manifests, tags, catalog) is redirected upstream
pub fn registry_routes() -> Router<AppState> {
    Router::new()
        .route("/v2", get(redirect_handler))
        .route("/v2/{*path}", get(redirect_handler))
}
