//! Handler for registry `/v2/` requests.

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::Redirect,
};
use tracing::debug;

use crate::domain::blob::{BlobRequest, blob_url};
use crate::domain::region::resolve_endpoint;
use crate::state::AppState;
use crate::utils::extract_region::extract_region_from_headers;
use crate::utils::upstream::upstream_url;

/// Redirects a registry request to the nearest bucket or to the upstream registry.
///
/// # Endpoint
///
/// `GET|HEAD /v2/{*path}`
///
/// # Request Flow
///
/// 1. Anything other than `<name>/blobs/sha256:<hash>` goes upstream
/// 2. Read the client region from the configured header (`GLOBAL` if absent)
/// 3. Resolve the region to a bucket; unknown or unreadable regions go upstream
/// 4. Check the blob exists in that bucket (cached after the first `200 OK`)
/// 5. Return 307 Temporary Redirect to the bucket object, or upstream otherwise
///
/// The query string is forwarded on upstream redirects only.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Redirect {
    let path = uri
        .path()
        .strip_prefix("/v2")
        .unwrap_or_default()
        .trim_start_matches('/');
    let upstream = upstream_url(&state.upstream_registry, path, uri.query());

    let Some(blob) = BlobRequest::parse(path) else {
        debug!(path, "Not a blob request, redirecting upstream");
        return Redirect::temporary(&upstream);
    };

    let Some(region) = extract_region_from_headers(&headers, &state.region_header) else {
        debug!("Unreadable region header, redirecting upstream");
        return Redirect::temporary(&upstream);
    };

    let Some(endpoint) = resolve_endpoint(&region) else {
        debug!(region = %region, "No bucket for region, redirecting upstream");
        return Redirect::temporary(&upstream);
    };

    let target = blob_url(endpoint, &blob.layer_hash);

    if state
        .blob_checker
        .blob_exists(&target, endpoint, &blob.layer_hash)
        .await
    {
        debug!(name = %blob.name, region = %region, "Redirecting blob to bucket");
        Redirect::temporary(&target)
    } else {
        debug!(name = %blob.name, region = %region, "Blob not in bucket, redirecting upstream");
        Redirect::temporary(&upstream)
    }
}
