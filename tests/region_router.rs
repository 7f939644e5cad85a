use registry_redirect::domain::region::{
    GLOBAL_REGION, buckets, default_endpoint, known_regions, resolve_endpoint,
};

const ALL_REGIONS: &[&str] = &[
    "us-east-1",
    "sa-east-1",
    "us-gov-east-1",
    "GLOBAL",
    "us-east-2",
    "ca-central-1",
    "us-west-1",
    "us-gov-west-1",
    "us-west-2",
    "ca-west-1",
    "ap-south-1",
    "ap-south-2",
    "me-south-1",
    "me-central-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-6",
    "ap-east-1",
    "cn-northwest-1",
    "cn-north-1",
    "eu-central-1",
    "eu-central-2",
    "eu-south-1",
    "eu-south-2",
    "il-central-1",
    "eu-west-1",
    "af-south-1",
    "eu-west-2",
    "eu-west-3",
    "eu-north-1",
];

#[test]
fn test_every_known_region_resolves() {
    for region in ALL_REGIONS {
        let endpoint = resolve_endpoint(region);
        assert!(
            endpoint.is_some_and(|e| !e.is_empty()),
            "{region} has no bucket"
        );
    }
}

#[test]
fn test_known_regions_matches_table() {
    let mut listed: Vec<_> = known_regions().collect();
    let mut expected = ALL_REGIONS.to_vec();
    listed.sort_unstable();
    expected.sort_unstable();
    assert_eq!(listed, expected);
}

#[test]
fn test_global_routes_to_default_bucket() {
    assert_eq!(
        resolve_endpoint(GLOBAL_REGION),
        Some("https://prod-registry-k8s-io-us-east-1.s3.dualstack.us-east-1.amazonaws.com")
    );
    assert_eq!(resolve_endpoint(GLOBAL_REGION), Some(default_endpoint()));
}

#[test]
fn test_unknown_regions_have_no_route() {
    for region in [
        "",
        "global",
        "Us-East-1",
        "us-east-1 ",
        "us-east-3",
        "mars-north-1",
        "europe-west1",
    ] {
        assert_eq!(resolve_endpoint(region), None, "{region:?} should not route");
    }
}

#[test]
fn test_resolve_is_idempotent() {
    for region in ALL_REGIONS {
        assert_eq!(resolve_endpoint(region), resolve_endpoint(region));
    }
}

#[test]
fn test_canada_central_shares_ohio_bucket() {
    let ohio = resolve_endpoint("us-east-2").unwrap();
    assert_eq!(resolve_endpoint("ca-central-1"), Some(ohio));
    assert!(ohio.contains("us-east-2"));
}

#[test]
fn test_sao_paulo_shares_virginia_bucket() {
    let virginia = resolve_endpoint("us-east-1");
    assert_eq!(resolve_endpoint("sa-east-1"), virginia);
    assert_eq!(resolve_endpoint("GLOBAL"), virginia);
}

#[test]
fn test_neighbour_groupings() {
    let same = |a: &str, b: &str| resolve_endpoint(a) == resolve_endpoint(b);

    assert!(same("me-central-1", "ap-south-1"));
    assert!(same("ap-northeast-3", "ap-northeast-1"));
    assert!(same("cn-north-1", "ap-southeast-1"));
    assert!(same("il-central-1", "eu-central-1"));
    assert!(same("af-south-1", "eu-west-1"));
    assert!(same("eu-north-1", "eu-west-2"));
    assert!(same("us-gov-west-1", "us-west-1"));
    assert!(same("ca-west-1", "us-west-2"));

    assert!(!same("eu-west-1", "eu-west-2"));
    assert!(!same("us-west-1", "us-west-2"));
}

#[test]
fn test_each_bucket_serves_its_own_region() {
    assert_eq!(buckets().len(), 10);
    for group in buckets() {
        assert_eq!(resolve_endpoint(group.bucket_region), Some(group.endpoint));
        assert_eq!(
            group.endpoint,
            format!(
                "https://prod-registry-k8s-io-{r}.s3.dualstack.{r}.amazonaws.com",
                r = group.bucket_region
            )
        );
    }
}
