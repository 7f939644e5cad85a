//! Helpers shared by request handlers.
//!
//! - [`extract_region`] - Client region from request headers
//! - [`upstream`] - Upstream registry URL normalization and redirect targets

pub mod extract_region;
pub mod upstream;
