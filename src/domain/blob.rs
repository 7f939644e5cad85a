//! Blob request paths and bucket object URLs.

use regex::Regex;
use std::sync::LazyLock;

static BLOB_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[a-z0-9]+(?:(?:\.|_|__|-+)[a-z0-9]+)*(?:/[a-z0-9]+(?:(?:\.|_|__|-+)[a-z0-9]+)*)*)/blobs/sha256:(?P<hash>[a-f0-9]{64})$",
    )
    .expect("blob path regex is valid")
});

/// A layer blob request parsed from a `/v2/` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRequest {
    /// Repository name, e.g. `pause` or `sig-storage/csi-attacher`.
    pub name: String,
    /// Lowercase hex sha256 digest without the `sha256:` prefix.
    pub layer_hash: String,
}

impl BlobRequest {
    /// Parses the part of a registry path following `/v2/`.
    ///
    /// Returns `None` for anything that is not `<name>/blobs/sha256:<hash>`,
    /// including digests with the wrong length or uppercase hex.
    pub fn parse(path: &str) -> Option<Self> {
        let caps = BLOB_PATH_RE.captures(path)?;
        Some(Self {
            name: caps["name"].to_string(),
            layer_hash: caps["hash"].to_string(),
        })
    }
}

/// URL of a layer blob inside a bucket.
///
/// Blobs in the buckets are stored at `/containers/images/sha256:<hash>`.
pub fn blob_url(endpoint: &str, layer_hash: &str) -> String {
    format!(
        "{}/containers/images/sha256:{}",
        endpoint.trim_end_matches('/'),
        layer_hash
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_parse_blob_path() {
        let req = BlobRequest::parse(&format!("pause/blobs/sha256:{HASH}")).unwrap();
        assert_eq!(req.name, "pause");
        assert_eq!(req.layer_hash, HASH);
    }

    #[test]
    fn test_parse_nested_repository() {
        let req =
            BlobRequest::parse(&format!("sig-storage/csi-attacher/blobs/sha256:{HASH}")).unwrap();
        assert_eq!(req.name, "sig-storage/csi-attacher");
    }

    #[test]
    fn test_parse_repository_name_separators() {
        for name in ["foo__bar", "a--b", "kube.proxy", "a_b/c---d/e__f.g"] {
            let req = BlobRequest::parse(&format!("{name}/blobs/sha256:{HASH}"));
            assert_eq!(req.map(|r| r.name).as_deref(), Some(name));
        }
    }

    #[test]
    fn test_parse_rejects_invalid_repository_names() {
        for name in ["foo___bar", "-foo", "foo-", "foo//bar", "foo_.bar", "Foo"] {
            assert!(
                BlobRequest::parse(&format!("{name}/blobs/sha256:{HASH}")).is_none(),
                "{name} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_blob_paths() {
        assert!(BlobRequest::parse("pause/manifests/3.9").is_none());
        assert!(BlobRequest::parse("pause/blobs/sha256:abc").is_none());
        assert!(BlobRequest::parse(&format!("pause/blobs/sha512:{HASH}")).is_none());
        assert!(BlobRequest::parse(&format!("pause/blobs/sha256:{}", HASH.to_uppercase())).is_none());
        assert!(BlobRequest::parse(&format!("/blobs/sha256:{HASH}")).is_none());
    }

    #[test]
    fn test_blob_url() {
        assert_eq!(
            blob_url("https://bucket.example.com", "abc"),
            "https://bucket.example.com/containers/images/sha256:abc"
        );
        assert_eq!(
            blob_url("https://bucket.example.com/", "abc"),
            "https://bucket.example.com/containers/images/sha256:abc"
        );
    }
}
