//! Cloudflare `ZoneProvider` trait implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::{qualify_name, strip_trailing_dot};
use crate::traits::{ProviderErrorMapper, ZoneProvider};
use crate::types::{ProviderZone, RecordSet, parse_record_type};

use super::types::{AccountRef, CreateZoneBody};
use super::{CloudflareDnsRecord, CloudflareProvider, CloudflareZone, MAX_PAGE_SIZE_RECORDS, MAX_PAGE_SIZE_ZONES};

impl CloudflareProvider {
    fn zone_to_provider_zone(zone: CloudflareZone) -> ProviderZone {
        ProviderZone {
            id: zone.id,
            name: qualify_name(&zone.name),
        }
    }

    /// Folds individual Cloudflare records into record sets keyed by
    /// (name, type). Records with types the harness does not model are
    /// skipped rather than failing the whole listing.
    pub(crate) fn group_records(records: Vec<CloudflareDnsRecord>) -> Vec<RecordSet> {
        let mut sets: BTreeMap<(String, &'static str), RecordSet> = BTreeMap::new();

        for record in records {
            let Ok(record_type) = parse_record_type(&record.record_type, "cloudflare") else {
                log::debug!(
                    "[cloudflare] Skipping record '{}' with unsupported type {}",
                    record.name,
                    record.record_type
                );
                continue;
            };

            let value = match record.priority {
                Some(priority) => format!("{priority} {}", record.content),
                None => record.content,
            };

            let name = qualify_name(&record.name);
            sets.entry((name.clone(), record_type.as_str()))
                .or_insert_with(|| RecordSet {
                    name,
                    record_type,
                    ttl: record.ttl,
                    values: Vec::new(),
                })
                .values
                .push(value);
        }

        sets.into_values().collect()
    }
}

#[async_trait]
impl ZoneProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn create_zone(&self, name: &str, caller_reference: &str) -> Result<ProviderZone> {
        // Cloudflare deduplicates zone creation by name; the reference is
        // recorded for traceability only.
        log::debug!("[cloudflare] create_zone {name} (reference {caller_reference})");

        let body = CreateZoneBody {
            name: strip_trailing_dot(name).to_string(),
            account: AccountRef {
                id: self.account_id.clone(),
            },
        };
        let zone: CloudflareZone = self.post("/zones", &body, Some(name)).await?;
        Ok(Self::zone_to_provider_zone(zone))
    }

    async fn list_zones(&self) -> Result<Vec<ProviderZone>> {
        let zones: Vec<CloudflareZone> = self
            .get_all_pages("/zones", MAX_PAGE_SIZE_ZONES, None)
            .await?;
        Ok(zones.into_iter().map(Self::zone_to_provider_zone).collect())
    }

    async fn list_record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>> {
        let records: Vec<CloudflareDnsRecord> = self
            .get_all_pages(
                &format!("/zones/{zone_id}/dns_records"),
                MAX_PAGE_SIZE_RECORDS,
                Some(zone_id),
            )
            .await?;
        Ok(Self::group_records(records))
    }

    async fn delete_record_set(&self, zone_id: &str, record_set: &RecordSet) -> Result<()> {
        // Cloudflare deletes individual records by id; resolve the set's
        // member ids first, then delete each one.
        let path = format!(
            "/zones/{zone_id}/dns_records?name={}&type={}",
            strip_trailing_dot(&record_set.name),
            record_set.record_type
        );
        let records: Vec<CloudflareDnsRecord> = self
            .get_all_pages(&path, MAX_PAGE_SIZE_RECORDS, Some(zone_id))
            .await?;

        for record in records {
            self.delete_request(
                &format!("/zones/{zone_id}/dns_records/{}", record.id),
                Some(zone_id),
            )
            .await?;
        }
        Ok(())
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        log::debug!("[{}] delete_zone {zone_id}", self.provider_name());
        self.delete_request(&format!("/zones/{zone_id}"), Some(zone_id))
            .await
    }
}
