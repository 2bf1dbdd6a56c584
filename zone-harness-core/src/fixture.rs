//! Ephemeral zone fixtures: unique naming, creation, and guaranteed cleanup.

use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use zone_harness_provider::{ProviderZone, ZoneProvider};

use crate::context::ScenarioContext;
use crate::error::HarnessResult;

/// Parent domain under which fixture zones are created.
const FIXTURE_PARENT: &str = "example.com";

fn rng() -> &'static Mutex<StdRng> {
    static RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();
    RNG.get_or_init(|| {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        Mutex::new(StdRng::seed_from_u64(u64::from(nanos)))
    })
}

/// Produces a short hexadecimal reference unique within the process.
///
/// The generator is seeded once per process, so consecutive references
/// differ even when requested within the same clock tick.
#[must_use]
pub fn unique_reference() -> String {
    let mut rng = rng().lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    format!("{:x}", rng.random::<u64>())
}

/// Builds a fresh fixture domain name, e.g. `3f2a9c0d1e4b5a67.example.com`.
#[must_use]
pub fn test_domain_name() -> String {
    format!("{}.{FIXTURE_PARENT}", unique_reference())
}

/// Creates the named zone and registers it for teardown.
///
/// Each creation carries a fresh [`unique_reference()`] as its idempotency
/// token. Registration happens immediately after creation succeeds, before
/// any assertion about the zone runs, so a later step failure cannot leak it.
pub async fn create_domain(ctx: &mut ScenarioContext, name: &str) -> HarnessResult<ProviderZone> {
    let zone = ctx.provider().create_zone(name, &unique_reference()).await?;
    ctx.register_cleanup(zone.id.clone());
    Ok(zone)
}

/// Looks up a zone by domain name, tolerating a missing trailing dot.
pub async fn find_zone(
    provider: &dyn ZoneProvider,
    name: &str,
) -> HarnessResult<Option<ProviderZone>> {
    let qualified = format!("{}.", name.trim_end_matches('.'));
    let zones = provider.list_zones().await?;
    Ok(zones.into_iter().find(|z| z.name == qualified))
}

/// Best-effort removal of a single zone: deletes its non-authority record
/// sets, then the zone itself.
///
/// Every provider failure is logged as a warning and swallowed; cleanup of
/// one zone never prevents cleanup of another, and a zone already deleted
/// out of band is not an error.
pub async fn cleanup_zone(provider: &dyn ZoneProvider, zone_id: &str) {
    let sets = match provider.list_record_sets(zone_id).await {
        Ok(sets) => sets,
        Err(e) => {
            warn!("Warning: cleanup failed - {e}");
            return;
        }
    };

    let doomed: Vec<_> = sets.into_iter().filter(|s| !s.is_authority()).collect();
    if !doomed.is_empty() {
        match provider.delete_record_sets(zone_id, &doomed).await {
            Ok(result) => {
                for failure in &result.failures {
                    warn!(
                        "Warning: cleanup failed - {} {}: {}",
                        failure.record_name, failure.record_type, failure.reason
                    );
                }
            }
            Err(e) => warn!("Warning: cleanup failed - {e}"),
        }
    }

    if let Err(e) = provider.delete_zone(zone_id).await {
        warn!("Warning: cleanup failed - {e}");
    }
}

/// Tears down every zone registered in the context, unconditionally.
///
/// Runs after the scenario regardless of step outcomes. Draining the
/// registry first makes teardown idempotent.
pub async fn teardown(ctx: &mut ScenarioContext) {
    for zone_id in ctx.drain_cleanup() {
        cleanup_zone(ctx.provider().as_ref(), &zone_id).await;
    }
}
