//! Cloudflare provider live tests.
//!
//! Run with:
//! ```bash
//! CLOUDFLARE_API_TOKEN=xxx CLOUDFLARE_ACCOUNT_ID=yyy \
//!     cargo test -p zone-harness-provider --test cloudflare_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::provider_from_env;

#[tokio::test]
#[ignore = "live test: requires CLOUDFLARE_API_TOKEN and CLOUDFLARE_ACCOUNT_ID"]
async fn cloudflare_list_zones() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "CLOUDFLARE_ACCOUNT_ID");

    let provider = require_some!(provider_from_env(), "failed to build provider");
    let zones = require_ok!(provider.list_zones().await, "list_zones failed");

    for zone in &zones {
        assert!(
            zone.name.ends_with('.'),
            "zone names must be dot-qualified, got {}",
            zone.name
        );
    }
    println!("✓ list_zones returned {} zones", zones.len());
}

#[tokio::test]
#[ignore = "live test: requires CLOUDFLARE_API_TOKEN and CLOUDFLARE_ACCOUNT_ID"]
async fn cloudflare_zone_lifecycle() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "CLOUDFLARE_ACCOUNT_ID");

    let provider = require_some!(provider_from_env(), "failed to build provider");

    let reference = format!("{:x}", std::process::id());
    let name = format!("{reference}.example.com");

    let zone = require_ok!(
        provider.create_zone(&name, &reference).await,
        "create_zone failed"
    );
    assert_eq!(zone.name, format!("{name}."));

    let sets = require_ok!(
        provider.list_record_sets(&zone.id).await,
        "list_record_sets failed"
    );
    // Only authority record sets exist right after creation.
    assert!(sets.iter().all(zone_harness_provider::RecordSet::is_authority));

    require_ok!(provider.delete_zone(&zone.id).await, "delete_zone failed");
    println!("✓ zone lifecycle completed for {name}");
}
