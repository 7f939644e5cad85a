//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`blob_check`] - HTTP existence probes with an in-memory cache of confirmed blobs

pub mod blob_check;
