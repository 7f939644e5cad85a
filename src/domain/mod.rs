//! Domain layer: routing decisions independent of HTTP and I/O.
//!
//! - [`region`] - Region to storage bucket table
//! - [`blob`] - Blob request parsing and bucket object URLs

pub mod blob;
pub mod region;
