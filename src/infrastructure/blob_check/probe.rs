//! HTTP HEAD probe against bucket objects.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors raised when a probe gets no HTTP response at all.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("HEAD {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetches the status of an object without transferring its body.
///
/// # Implementations
///
/// - [`HttpProbe`] - `reqwest` client with a pooled connection
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobProbe: Send + Sync {
    /// Issues a HEAD request and returns the response status.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Transport`] when no response was received
    /// (DNS failure, connection refused, client timeout).
    async fn head(&self, url: &str) -> Result<StatusCode, ProbeError>;
}

/// [`BlobProbe`] backed by a shared `reqwest` client.
///
/// The client timeout is the only timeout applied to a probe.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Builds a probe whose requests give up after `timeout`.
    ///
    /// Redirects are not followed: a bucket answering with a redirect does
    /// not count as serving the blob.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Client`] if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ProbeError::Client)?;

        Ok(Self { client })
    }

    /// Wraps an existing client, sharing its connection pool.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlobProbe for HttpProbe {
    async fn head(&self, url: &str) -> Result<StatusCode, ProbeError> {
        let response =
            self.client
                .head(url)
                .send()
                .await
                .map_err(|source| ProbeError::Transport {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        // Release the connection back to the pool before returning.
        drop(response);

        Ok(status)
    }
}
