//! Client region extraction from HTTP request headers.

use crate::domain::region::GLOBAL_REGION;
use axum::http::HeaderMap;

/// Reads the client region from the `header_name` request header.
///
/// Surrounding whitespace is stripped. A missing or blank header means the
/// client location is unknown and yields [`GLOBAL_REGION`]. The value is not
/// checked against the routing table; unknown regions are left to the caller.
///
/// Returns `None` if the header value is not visible ASCII. Such a region
/// cannot be routed, so the caller treats it like an unknown one.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-client-region", "eu-west-3".parse().unwrap());
///
/// let region = extract_region_from_headers(&headers, "x-client-region");
/// assert_eq!(region.as_deref(), Some("eu-west-3"));
/// ```
pub fn extract_region_from_headers(headers: &HeaderMap, header_name: &str) -> Option<String> {
    let Some(value) = headers.get(header_name) else {
        return Some(GLOBAL_REGION.to_string());
    };

    let region = value.to_str().ok()?.trim();

    if region.is_empty() {
        return Some(GLOBAL_REGION.to_string());
    }

    Some(region.to_string())
}
