#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::head,
};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use registry_redirect::infrastructure::blob_check::BlobChecker;
use registry_redirect::state::AppState;

pub const UPSTREAM: &str = "https://registry.example.com";
pub const REGION_HEADER: &str = "x-client-region";
pub const HASH: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Checker answering a fixed result and recording every call.
pub struct StubBlobChecker {
    exists: bool,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl StubBlobChecker {
    pub fn new(exists: bool) -> Arc<Self> {
        Arc::new(Self {
            exists,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobChecker for StubBlobChecker {
    async fn blob_exists(&self, blob_url: &str, bucket: &str, layer_hash: &str) -> bool {
        self.calls.lock().unwrap().push((
            blob_url.to_string(),
            bucket.to_string(),
            layer_hash.to_string(),
        ));
        self.exists
    }

    fn cached_blobs(&self) -> usize {
        0
    }
}

pub fn create_test_state(checker: Arc<dyn BlobChecker>) -> AppState {
    AppState::new(checker, UPSTREAM.to_string(), REGION_HEADER.to_string())
}

/// A local stand-in for an S3 bucket answering HEAD on blob objects.
pub struct StubBucket {
    pub endpoint: String,
    hits: Arc<AtomicUsize>,
}

impl StubBucket {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct BucketState {
    present: Arc<HashSet<String>>,
    hits: Arc<AtomicUsize>,
}

async fn head_object(
    State(state): State<BucketState>,
    Path(object): Path<String>,
) -> StatusCode {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match object.strip_prefix("sha256:") {
        Some(hash) if state.present.contains(hash) => StatusCode::OK,
        Some(hash) if hash.starts_with("forbidden") => StatusCode::FORBIDDEN,
        Some(hash) if hash.starts_with("moved") => StatusCode::TEMPORARY_REDIRECT,
        _ => StatusCode::NOT_FOUND,
    }
}

/// Serves a bucket holding `present` layer hashes on an ephemeral port.
pub async fn spawn_bucket(present: &[&str]) -> StubBucket {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = BucketState {
        present: Arc::new(present.iter().map(|h| h.to_string()).collect()),
        hits: hits.clone(),
    };

    let app = Router::new()
        .route("/containers/images/{object}", head(head_object))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBucket {
        endpoint: format!("http://{addr}"),
        hits,
    }
}

/// An endpoint on which nothing is listening.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
