//! # Registry Redirect
//!
//! Redirects container image layer pulls to the storage bucket nearest the
//! client, falling back to an upstream registry for everything else.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Region to bucket routing and blob paths
//! - **Infrastructure Layer** ([`infrastructure`]) - Cached HTTP existence checks
//! - **API Layer** ([`api`]) - Redirect and health handlers, middleware
//!
//! ## Request Flow
//!
//! 1. A client requests `/v2/<name>/blobs/sha256:<hash>`
//! 2. Its region is resolved to a bucket with [`domain::region::resolve_endpoint`]
//! 3. [`infrastructure::blob_check::BlobChecker`] confirms the layer is in the bucket
//! 4. The client is redirected to the bucket, or to the upstream registry
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::region::{GLOBAL_REGION, resolve_endpoint};
    pub use crate::error::AppError;
    pub use crate::infrastructure::blob_check::{
        BlobCache, BlobChecker, BlobProbe, CachedBlobChecker, HttpProbe,
    };
    pub use crate::state::AppState;
}
