//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::region::{buckets, known_regions};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Components Checked
///
/// 1. **Regions**: Size of the routing table
/// 2. **Blob cache**: Number of blobs known to exist
///
/// Neither component can fail at runtime, so the status is always `healthy`.
/// Buckets are not probed.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "regions": {
///       "status": "ok",
///       "message": "35 regions routed to 10 buckets"
///     },
///     "blob_cache": {
///       "status": "ok",
///       "message": "0 blobs cached"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            regions: check_regions(),
            blob_cache: check_blob_cache(&state),
        },
    };

    Json(response)
}

/// Reports the size of the region routing table.
fn check_regions() -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "{} regions routed to {} buckets",
            known_regions().count(),
            buckets().len()
        )),
    }
}

/// Reports how many blobs will be redirected without a probe.
fn check_blob_cache(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "{} blobs cached",
            state.blob_checker.cached_blobs()
        )),
    }
}
