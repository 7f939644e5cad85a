//! Blob existence checks against storage buckets.
//!
//! - [`BlobChecker`] - what request handlers depend on
//! - [`CachedBlobChecker`] - read-through cache over a [`BlobProbe`]
//! - [`HttpProbe`] - production HEAD probe using `reqwest`

mod cache;
mod checker;
mod probe;

pub use cache::BlobCache;
pub use checker::{BlobChecker, CachedBlobChecker};
pub use probe::{BlobProbe, HttpProbe, ProbeError};
