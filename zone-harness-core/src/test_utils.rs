//! In-memory [`ZoneProvider`] implementation for tests.
//!
//! Behaves like a real backend in the ways the harness cares about: fresh
//! zones carry authority record sets, deletion refuses non-empty zones, and
//! creation is idempotent per caller reference.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use zone_harness_provider::{
    ProviderError, ProviderZone, RecordSet, RecordType, Result, ZoneProvider,
};

const MOCK_PROVIDER: &str = "mock";

struct MockZone {
    zone: ProviderZone,
    record_sets: Vec<RecordSet>,
    fail_record_deletes: bool,
}

/// In-memory zone provider.
///
/// New zones are seeded with one NS set (two values) and one SOA set, so a
/// freshly created zone reports two record sets like a live backend would.
#[derive(Default)]
pub struct MockZoneProvider {
    zones: RwLock<HashMap<String, MockZone>>,
    references: RwLock<HashMap<String, String>>,
    next_id: AtomicUsize,
    delete_zone_calls: AtomicUsize,
}

impl MockZoneProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(zone: &str) -> ProviderError {
        ProviderError::ZoneNotFound {
            provider: MOCK_PROVIDER.to_string(),
            zone: zone.to_string(),
            raw_message: None,
        }
    }

    fn authority_sets(name: &str) -> Vec<RecordSet> {
        vec![
            RecordSet {
                name: name.to_string(),
                record_type: RecordType::Ns,
                ttl: 172_800,
                values: vec![
                    "ns1.mockdns.test.".to_string(),
                    "ns2.mockdns.test.".to_string(),
                ],
            },
            RecordSet {
                name: name.to_string(),
                record_type: RecordType::Soa,
                ttl: 900,
                values: vec![
                    "ns1.mockdns.test. hostmaster.mockdns.test. 1 7200 900 1209600 86400"
                        .to_string(),
                ],
            },
        ]
    }

    /// Adds a record set to an existing zone.
    pub async fn insert_record_set(&self, zone_id: &str, set: RecordSet) {
        if let Some(entry) = self.zones.write().await.get_mut(zone_id) {
            entry.record_sets.push(set);
        }
    }

    /// Drops a zone directly, simulating deletion out of band (for example
    /// by the CLI under test).
    pub async fn remove_zone(&self, zone_id: &str) {
        self.zones.write().await.remove(zone_id);
    }

    /// Makes every subsequent `delete_record_set` call against the zone fail.
    pub async fn fail_record_deletes(&self, zone_id: &str) {
        if let Some(entry) = self.zones.write().await.get_mut(zone_id) {
            entry.fail_record_deletes = true;
        }
    }

    pub async fn zone_count(&self) -> usize {
        self.zones.read().await.len()
    }

    /// Number of `delete_zone` calls observed, successful or not.
    pub fn delete_zone_calls(&self) -> usize {
        self.delete_zone_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    fn id(&self) -> &'static str {
        MOCK_PROVIDER
    }

    async fn create_zone(&self, name: &str, caller_reference: &str) -> Result<ProviderZone> {
        let qualified = format!("{}.", name.trim_end_matches('.'));

        if let Some(existing_id) = self.references.read().await.get(caller_reference) {
            if let Some(entry) = self.zones.read().await.get(existing_id) {
                return Ok(entry.zone.clone());
            }
        }

        let id = format!("mock-zone-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let zone = ProviderZone {
            id: id.clone(),
            name: qualified.clone(),
        };
        self.zones.write().await.insert(
            id.clone(),
            MockZone {
                zone: zone.clone(),
                record_sets: Self::authority_sets(&qualified),
                fail_record_deletes: false,
            },
        );
        self.references
            .write()
            .await
            .insert(caller_reference.to_string(), id);
        Ok(zone)
    }

    async fn list_zones(&self) -> Result<Vec<ProviderZone>> {
        let mut zones: Vec<ProviderZone> = self
            .zones
            .read()
            .await
            .values()
            .map(|entry| entry.zone.clone())
            .collect();
        zones.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(zones)
    }

    async fn list_record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>> {
        self.zones
            .read()
            .await
            .get(zone_id)
            .map(|entry| entry.record_sets.clone())
            .ok_or_else(|| Self::not_found(zone_id))
    }

    async fn delete_record_set(&self, zone_id: &str, record_set: &RecordSet) -> Result<()> {
        let mut zones = self.zones.write().await;
        let entry = zones.get_mut(zone_id).ok_or_else(|| Self::not_found(zone_id))?;
        if entry.fail_record_deletes {
            return Err(ProviderError::Unknown {
                provider: MOCK_PROVIDER.to_string(),
                raw_code: None,
                raw_message: format!("injected failure deleting {}", record_set.name),
            });
        }
        entry
            .record_sets
            .retain(|s| !(s.name == record_set.name && s.record_type == record_set.record_type));
        Ok(())
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        self.delete_zone_calls.fetch_add(1, Ordering::SeqCst);
        let mut zones = self.zones.write().await;
        let entry = zones.get(zone_id).ok_or_else(|| Self::not_found(zone_id))?;
        if entry.record_sets.iter().any(|s| !s.is_authority()) {
            return Err(ProviderError::ZoneNotEmpty {
                provider: MOCK_PROVIDER.to_string(),
                zone: entry.zone.name.clone(),
            });
        }
        zones.remove(zone_id);
        Ok(())
    }
}
