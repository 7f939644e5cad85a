//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export UPSTREAM_REGISTRY="https://registry.k8s.io"
//! export REGION_HEADER="x-client-region"
//! export PROBE_TIMEOUT_SECONDS="5"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `UPSTREAM_REGISTRY` - Where requests not served from a bucket are redirected
//!   (default: `https://registry.k8s.io`)
//! - `REGION_HEADER` - Request header carrying the client region (default: `x-client-region`)
//! - `PROBE_TIMEOUT_SECONDS` - Timeout of a blob existence probe (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::utils::upstream::normalize_registry_url;
use anyhow::{Context, Result};
use axum::http::HeaderName;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Normalized upstream registry base URL, without trailing slash.
    pub upstream_registry: String,
    /// Lowercase name of the header carrying the client region.
    pub region_header: String,
    /// Timeout applied by the HTTP client to each blob probe, in seconds.
    pub probe_timeout_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `UPSTREAM_REGISTRY` is not a usable HTTP(S) URL.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let upstream_registry = Self::load_upstream_registry()
            .context("Failed to load upstream registry configuration")?;

        let region_header = env::var("REGION_HEADER")
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_else(|_| "x-client-region".to_string());

        let probe_timeout_seconds = env::var("PROBE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            upstream_registry,
            region_header,
            probe_timeout_seconds,
            log_level,
            log_format,
        })
    }

    /// Loads and normalizes `UPSTREAM_REGISTRY`, falling back to `registry.k8s.io`.
    fn load_upstream_registry() -> Result<String> {
        let raw = env::var("UPSTREAM_REGISTRY")
            .unwrap_or_else(|_| "https://registry.k8s.io".to_string());

        normalize_registry_url(&raw).with_context(|| format!("UPSTREAM_REGISTRY is invalid: '{raw}'"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `region_header` is not a valid header name
    /// - `probe_timeout_seconds` is zero or above 60
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if HeaderName::from_bytes(self.region_header.as_bytes()).is_err() {
            anyhow::bail!(
                "REGION_HEADER must be a valid HTTP header name, got '{}'",
                self.region_header
            );
        }

        if self.probe_timeout_seconds == 0 {
            anyhow::bail!("PROBE_TIMEOUT_SECONDS must be greater than 0");
        }
        if self.probe_timeout_seconds > 60 {
            anyhow::bail!(
                "PROBE_TIMEOUT_SECONDS is too large (max: 60), got {}",
                self.probe_timeout_seconds
            );
        }

        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream registry: {}", self.upstream_registry);
        tracing::info!("  Region header: {}", self.region_header);
        tracing::info!("  Probe timeout: {}s", self.probe_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
