//! In-memory record of blobs confirmed to exist.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// Bucket → layer hashes observed to exist.
///
/// Only positive results are stored and entries are never removed, so a hit
/// means "existed at some point" and a miss means "unknown". The map is not
/// bounded; it lives as long as the process, which is recycled after idling.
///
/// Writes are idempotent inserts, so a poisoned lock is recovered rather than
/// propagated.
#[derive(Debug, Default)]
pub struct BlobCache {
    entries: RwLock<HashMap<String, HashSet<String>>>,
}

impl BlobCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `layer_hash` was recorded for `bucket`.
    pub fn get(&self, bucket: &str, layer_hash: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(bucket)
            .is_some_and(|hashes| hashes.contains(layer_hash))
    }

    /// Records that `layer_hash` exists in `bucket`.
    pub fn put(&self, bucket: &str, layer_hash: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries
            .entry(bucket.to_string())
            .or_default()
            .insert(layer_hash.to_string());
    }

    /// Total number of recorded blobs across all buckets.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
