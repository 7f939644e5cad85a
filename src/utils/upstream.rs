//! Upstream registry URL handling.
//!
//! Requests that cannot be served from a bucket are redirected to the
//! upstream registry at the same `/v2/` path.

use url::Url;

/// Errors raised when the configured upstream registry URL is unusable.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Upstream registry URL must not carry a query or fragment")]
    UnexpectedSuffix,
}

/// Normalizes an upstream registry base URL.
///
/// The scheme must be HTTP or HTTPS, the host is lowercased, default ports
/// and trailing slashes are dropped. A path prefix is kept.
///
/// # Errors
///
/// Returns [`UpstreamUrlError::InvalidFormat`] for malformed URLs,
/// [`UpstreamUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`UpstreamUrlError::UnexpectedSuffix`] if a query or fragment is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_registry_url("HTTPS://Registry.K8s.io:443/").unwrap(),
///     "https://registry.k8s.io"
/// );
/// ```
pub fn normalize_registry_url(input: &str) -> Result<String, UpstreamUrlError> {
    let url = Url::parse(input.trim())
        .map_err(|e| UpstreamUrlError::InvalidFormat(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UpstreamUrlError::UnsupportedProtocol);
    }

    if url.host_str().is_none() {
        return Err(UpstreamUrlError::InvalidFormat("missing host".to_string()));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(UpstreamUrlError::UnexpectedSuffix);
    }

    // Url already lowercases the host and drops default ports
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Builds the upstream redirect target for a `/v2/` request.
///
/// `path` is the part following `/v2/`; `query` is forwarded verbatim.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}/v2/{}?{}", base, path, q),
        _ => format!("{}/v2/{}", base, path),
    }
}
