use std::sync::Arc;

use crate::infrastructure::blob_check::BlobChecker;

#[derive(Clone)]
pub struct AppState {
    pub blob_checker: Arc<dyn BlobChecker>,
    /// Normalized base URL of the registry serving everything not in a bucket.
    pub upstream_registry: String,
    /// Request header carrying the client region.
    pub region_header: String,
}

impl AppState {
    pub fn new(
        blob_checker: Arc<dyn BlobChecker>,
        upstream_registry: String,
        region_header: String,
    ) -> Self {
        Self {
            blob_checker,
            upstream_registry,
            region_header,
        }
    }
}
