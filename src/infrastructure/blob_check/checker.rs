//! Cached blob existence checks.

use super::cache::BlobCache;
use super::probe::BlobProbe;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::debug;

/// Checks whether a blob can be served from a bucket, possibly with caching.
///
/// There is no error channel: a transport failure and a confirmed miss both
/// yield `false`, and the caller falls back to another redirect target.
#[async_trait]
pub trait BlobChecker: Send + Sync {
    /// Returns true if `blob_url` exists.
    ///
    /// `bucket` and `layer_hash` key the cache and are not used to build the URL.
    async fn blob_exists(&self, blob_url: &str, bucket: &str, layer_hash: &str) -> bool;

    /// Number of blobs currently known to exist without probing.
    fn cached_blobs(&self) -> usize;
}

/// [`BlobChecker`] that remembers every blob answered with `200 OK`.
///
/// Concurrent misses for the same blob are not coalesced; each caller probes.
pub struct CachedBlobChecker<P: BlobProbe> {
    probe: P,
    cache: Arc<BlobCache>,
}

impl<P: BlobProbe> CachedBlobChecker<P> {
    /// Creates a checker with an empty cache.
    pub fn new(probe: P) -> Self {
        Self::with_cache(probe, Arc::new(BlobCache::new()))
    }

    /// Creates a checker recording into `cache`.
    pub fn with_cache(probe: P, cache: Arc<BlobCache>) -> Self {
        Self { probe, cache }
    }

    pub fn cache(&self) -> &Arc<BlobCache> {
        &self.cache
    }
}

#[async_trait]
impl<P: BlobProbe> BlobChecker for CachedBlobChecker<P> {
    async fn blob_exists(&self, blob_url: &str, bucket: &str, layer_hash: &str) -> bool {
        if self.cache.get(bucket, layer_hash) {
            debug!(url = blob_url, "blob existence cache hit");
            return true;
        }
        debug!(url = blob_url, "blob existence cache miss");

        let status = match self.probe.head(blob_url).await {
            Ok(status) => status,
            Err(e) => {
                debug!(url = blob_url, error = %e, "blob probe failed, assuming absent");
                return false;
            }
        };

        // S3 and OCI registries both answer HEAD on an existing blob with 200
        if status == StatusCode::OK {
            self.cache.put(bucket, layer_hash);
            return true;
        }

        debug!(url = blob_url, status = status.as_u16(), "blob not available");
        false
    }

    fn cached_blobs(&self) -> usize {
        self.cache.len()
    }
}
