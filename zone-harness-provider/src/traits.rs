use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{BatchDeleteFailure, BatchDeleteResult, ProviderZone, RecordSet};

/// Raw API error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code, in whatever format the provider uses.
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Error mapping trait (internal). A provider implements this to translate its
/// raw API errors into the unified [`ProviderError`] type.
pub(crate) trait ProviderErrorMapper {
    /// Returns the provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Maps a raw API error to the unified error type. `zone` carries the zone
    /// name or identifier the failed call was about, when known.
    fn map_error(&self, raw: RawApiError, zone: Option<&str>) -> ProviderError;

    /// Shortcut: unknown error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Zone provider trait: the management surface the harness consumes.
///
/// Implementations talk to a live DNS service; the harness only ever creates
/// zones, inspects them, and tears them down again.
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Creates a hosted zone.
    ///
    /// `caller_reference` is a client-supplied idempotency token: retrying a
    /// creation with the same reference must not produce a duplicate zone.
    /// Backends without a native idempotency parameter deduplicate by name.
    async fn create_zone(&self, name: &str, caller_reference: &str) -> Result<ProviderZone>;

    /// Lists every hosted zone visible to the credentials.
    async fn list_zones(&self) -> Result<Vec<ProviderZone>>;

    /// Lists every record set in the given zone.
    async fn list_record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>>;

    /// Deletes one record set (every value it holds) from the given zone.
    async fn delete_record_set(&self, zone_id: &str, record_set: &RecordSet) -> Result<()>;

    /// Deletes the given zone. Providers may refuse while non-authority
    /// record sets remain ([`ProviderError::ZoneNotEmpty`]).
    async fn delete_zone(&self, zone_id: &str) -> Result<()>;

    /// Deletes a batch of record sets, collecting per-set results.
    ///
    /// The default implementation issues concurrent `delete_record_set()`
    /// calls and never short-circuits: one failed deletion does not prevent
    /// the remaining sets from being attempted. Providers with a native batch
    /// change API may override this.
    async fn delete_record_sets(
        &self,
        zone_id: &str,
        record_sets: &[RecordSet],
    ) -> Result<BatchDeleteResult> {
        let futures: Vec<_> = record_sets
            .iter()
            .map(|set| self.delete_record_set(zone_id, set))
            .collect();
        let results = futures::future::join_all(futures).await;

        let mut success_count = 0;
        let mut failures = Vec::new();

        for (i, result) in results.into_iter().enumerate() {
            match result {
                Ok(()) => success_count += 1,
                Err(e) => failures.push(BatchDeleteFailure {
                    record_name: record_sets[i].name.clone(),
                    record_type: record_sets[i].record_type,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(BatchDeleteResult {
            success_count,
            failed_count: failures.len(),
            failures,
        })
    }
}
