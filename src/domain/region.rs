//! Region to storage bucket routing.
//!
//! Each [`BucketGroup`] names the region that physically hosts a bucket,
//! followed by the regions routed to it based roughly on physical adjacency
//! (and therefore presumed latency).
//!
//! When adding a bucket, add a group for the region it lives in and consider
//! moving neighbouring regions that do not have their own bucket. A region
//! missing from every group is never routed; see [`resolve_endpoint`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Sentinel region for clients whose location is unknown or unspecified.
///
/// Routed to the first (default) bucket group.
pub const GLOBAL_REGION: &str = "GLOBAL";

/// A storage bucket and the client regions served from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketGroup {
    /// Region hosting the bucket.
    pub bucket_region: &'static str,
    /// Base URL of the bucket. Blobs live under `/containers/images/sha256:<hash>`.
    pub endpoint: &'static str,
    /// Every region identifier routed to this bucket, canonical region first.
    pub regions: &'static [&'static str],
}

/// Bucket groups in priority order. The first group is the catch-all default.
static BUCKET_GROUPS: &[BucketGroup] = &[
    // US East (N. Virginia)
    BucketGroup {
        bucket_region: "us-east-1",
        endpoint: "https://prod-registry-k8s-io-us-east-1.s3.dualstack.us-east-1.amazonaws.com",
        regions: &["us-east-1", "sa-east-1", "us-gov-east-1", GLOBAL_REGION],
    },
    // US East (Ohio)
    BucketGroup {
        bucket_region: "us-east-2",
        endpoint: "https://prod-registry-k8s-io-us-east-2.s3.dualstack.us-east-2.amazonaws.com",
        regions: &["us-east-2", "ca-central-1"],
    },
    // US West (N. California)
    BucketGroup {
        bucket_region: "us-west-1",
        endpoint: "https://prod-registry-k8s-io-us-west-1.s3.dualstack.us-west-1.amazonaws.com",
        regions: &["us-west-1", "us-gov-west-1"],
    },
    // US West (Oregon)
    BucketGroup {
        bucket_region: "us-west-2",
        endpoint: "https://prod-registry-k8s-io-us-west-2.s3.dualstack.us-west-2.amazonaws.com",
        regions: &["us-west-2", "ca-west-1"],
    },
    // Asia Pacific (Mumbai)
    BucketGroup {
        bucket_region: "ap-south-1",
        endpoint: "https://prod-registry-k8s-io-ap-south-1.s3.dualstack.ap-south-1.amazonaws.com",
        regions: &["ap-south-1", "ap-south-2", "me-south-1", "me-central-1"],
    },
    // Asia Pacific (Tokyo)
    BucketGroup {
        bucket_region: "ap-northeast-1",
        endpoint: "https://prod-registry-k8s-io-ap-northeast-1.s3.dualstack.ap-northeast-1.amazonaws.com",
        regions: &["ap-northeast-1", "ap-northeast-2", "ap-northeast-3"],
    },
    // Asia Pacific (Singapore)
    BucketGroup {
        bucket_region: "ap-southeast-1",
        endpoint: "https://prod-registry-k8s-io-ap-southeast-1.s3.dualstack.ap-southeast-1.amazonaws.com",
        regions: &[
            "ap-southeast-1",
            "ap-southeast-2",
            "ap-southeast-3",
            "ap-southeast-4",
            "ap-southeast-6",
            "ap-east-1",
            "cn-northwest-1",
            "cn-north-1",
        ],
    },
    // Europe (Frankfurt)
    BucketGroup {
        bucket_region: "eu-central-1",
        endpoint: "https://prod-registry-k8s-io-eu-central-1.s3.dualstack.eu-central-1.amazonaws.com",
        regions: &[
            "eu-central-1",
            "eu-central-2",
            "eu-south-1",
            "eu-south-2",
            "il-central-1",
        ],
    },
    // Europe (Ireland)
    BucketGroup {
        bucket_region: "eu-west-1",
        endpoint: "https://prod-registry-k8s-io-eu-west-1.s3.dualstack.eu-west-1.amazonaws.com",
        regions: &["eu-west-1", "af-south-1"],
    },
    // Europe (London)
    BucketGroup {
        bucket_region: "eu-west-2",
        endpoint: "https://prod-registry-k8s-io-eu-west-2.s3.dualstack.eu-west-2.amazonaws.com",
        regions: &["eu-west-2", "eu-west-3", "eu-north-1"],
    },
];

static REGION_INDEX: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    BUCKET_GROUPS
        .iter()
        .flat_map(|group| group.regions.iter().map(|region| (*region, group.endpoint)))
        .collect()
});

/// Returns the base bucket URL serving `region`.
///
/// Matching is exact and case-sensitive. Returns `None` for any region not
/// listed in a bucket group; callers should fall back to another redirect
/// target rather than retry.
///
/// # Examples
///
/// ```
/// use registry_redirect::domain::region::resolve_endpoint;
///
/// assert_eq!(resolve_endpoint("ca-central-1"), resolve_endpoint("us-east-2"));
/// assert_eq!(resolve_endpoint("moon-base-1"), None);
/// ```
pub fn resolve_endpoint(region: &str) -> Option<&'static str> {
    REGION_INDEX.get(region).copied()
}

/// All bucket groups, default group first.
pub fn buckets() -> &'static [BucketGroup] {
    BUCKET_GROUPS
}

/// Endpoint of the catch-all bucket used for [`GLOBAL_REGION`].
pub fn default_endpoint() -> &'static str {
    BUCKET_GROUPS[0].endpoint
}

/// Every region identifier that has a route, in table order.
pub fn known_regions() -> impl Iterator<Item = &'static str> {
    BUCKET_GROUPS
        .iter()
        .flat_map(|group| group.regions.iter().copied())
}
