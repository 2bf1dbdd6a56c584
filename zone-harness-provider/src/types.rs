use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

// ============ Zone Types ============

/// A hosted zone as returned by a provider.
///
/// `name` is always fully qualified with a trailing dot, regardless of the
/// backend's own convention, so that callers can match names uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderZone {
    /// Provider-specific zone identifier (the zone handle).
    pub id: String,
    /// Fully qualified zone name, e.g. `"example.com."`.
    pub name: String,
}

// ============ Record Types ============

/// DNS record type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Start of authority record.
    Soa,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
}

impl RecordType {
    /// Uppercase zone-file representation of this record type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Soa => "SOA",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }

    /// Whether this is a zone authority type (NS or SOA).
    ///
    /// Authority record sets are provider-managed: they exist from zone
    /// creation and cannot be deleted while the zone exists.
    #[must_use]
    pub fn is_authority(self) -> bool {
        matches!(self, Self::Ns | Self::Soa)
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts an uppercase type string into a [`RecordType`].
pub(crate) fn parse_record_type(record_type: &str, provider: &str) -> Result<RecordType> {
    match record_type.to_uppercase().as_str() {
        "A" => Ok(RecordType::A),
        "AAAA" => Ok(RecordType::Aaaa),
        "CNAME" => Ok(RecordType::Cname),
        "MX" => Ok(RecordType::Mx),
        "TXT" => Ok(RecordType::Txt),
        "NS" => Ok(RecordType::Ns),
        "SOA" => Ok(RecordType::Soa),
        "SRV" => Ok(RecordType::Srv),
        "CAA" => Ok(RecordType::Caa),
        _ => Err(ProviderError::ParseError {
            provider: provider.to_string(),
            detail: format!("unsupported record type: {record_type}"),
        }),
    }
}

/// A named resource record set with one or more values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Fully qualified record name with trailing dot, e.g. `"www.example.com."`.
    pub name: String,
    /// Record type of every value in this set.
    pub record_type: RecordType,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Record data values, one per resource record.
    pub values: Vec<String>,
}

impl RecordSet {
    /// Whether this set holds zone authority records (NS or SOA).
    #[must_use]
    pub fn is_authority(&self) -> bool {
        self.record_type.is_authority()
    }

    /// Renders one zone-file-style line per value:
    /// `"<name> <ttl> IN <TYPE> <value>"`, space separated.
    #[must_use]
    pub fn bind_lines(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|value| {
                format!(
                    "{} {} IN {} {}",
                    self.name, self.ttl, self.record_type, value
                )
            })
            .collect()
    }
}

// ============ Batch Operation Types ============

/// Result of a batch record-set delete operation.
///
/// Collects per-set outcomes; one failed deletion never aborts the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResult {
    /// Number of record sets successfully deleted.
    pub success_count: usize,
    /// Number of record sets that failed to delete.
    pub failed_count: usize,
    /// Details about each failed deletion.
    pub failures: Vec<BatchDeleteFailure>,
}

/// Information about a single failed record-set deletion in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteFailure {
    /// Name of the record set that failed to delete.
    pub record_name: String,
    /// Record type of the failed set.
    pub record_type: RecordType,
    /// Human-readable reason for the failure.
    pub reason: String,
}

// ============ Credential Types ============

/// Type-safe credential container for supported zone providers.
///
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate
/// a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Cloudflare credentials.
    #[serde(rename = "cloudflare")]
    Cloudflare {
        /// Cloudflare API token.
        api_token: String,
        /// Account to create zones under.
        account_id: String,
    },
}

impl ProviderCredentials {
    /// Reads Cloudflare credentials from `CLOUDFLARE_API_TOKEN` and
    /// `CLOUDFLARE_ACCOUNT_ID`, returning `None` if either is unset.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_token = std::env::var("CLOUDFLARE_API_TOKEN").ok()?;
        let account_id = std::env::var("CLOUDFLARE_ACCOUNT_ID").ok()?;
        Some(Self::Cloudflare {
            api_token,
            account_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_round_trip_str() {
        for t in [
            RecordType::A,
            RecordType::Aaaa,
            RecordType::Cname,
            RecordType::Mx,
            RecordType::Txt,
            RecordType::Ns,
            RecordType::Soa,
            RecordType::Srv,
            RecordType::Caa,
        ] {
            let parsed = parse_record_type(t.as_str(), "test");
            assert!(parsed.is_ok(), "failed to parse {t}: {parsed:?}");
            let Ok(back) = parsed else {
                return;
            };
            assert_eq!(back, t);
        }
    }

    #[test]
    fn record_type_parse_is_case_insensitive() {
        let parsed = parse_record_type("cname", "test");
        assert!(matches!(parsed, Ok(RecordType::Cname)), "got {parsed:?}");
    }

    #[test]
    fn record_type_parse_rejects_unknown() {
        let parsed = parse_record_type("LOC", "test");
        assert!(
            matches!(&parsed, Err(ProviderError::ParseError { .. })),
            "got {parsed:?}"
        );
    }

    #[test]
    fn authority_types() {
        assert!(RecordType::Ns.is_authority());
        assert!(RecordType::Soa.is_authority());
        assert!(!RecordType::A.is_authority());
        assert!(!RecordType::Txt.is_authority());
    }

    #[test]
    fn bind_lines_one_per_value() {
        let set = RecordSet {
            name: "test.example.com.".to_string(),
            record_type: RecordType::A,
            ttl: 300,
            values: vec!["1.2.3.4".to_string(), "5.6.7.8".to_string()],
        };
        assert_eq!(
            set.bind_lines(),
            vec![
                "test.example.com. 300 IN A 1.2.3.4".to_string(),
                "test.example.com. 300 IN A 5.6.7.8".to_string(),
            ]
        );
    }

    #[test]
    fn bind_lines_empty_values() {
        let set = RecordSet {
            name: "empty.example.com.".to_string(),
            record_type: RecordType::Txt,
            ttl: 60,
            values: vec![],
        };
        assert!(set.bind_lines().is_empty());
    }

    #[test]
    fn credentials_serde_round_trip() {
        let creds = ProviderCredentials::Cloudflare {
            api_token: "token-123".to_string(),
            account_id: "acct-456".to_string(),
        };
        let json = serde_json::to_string(&creds).unwrap();
        assert!(json.contains("\"provider\":\"cloudflare\""));
        let back: ProviderCredentials = serde_json::from_str(&json).unwrap();
        let ProviderCredentials::Cloudflare {
            api_token,
            account_id,
        } = back;
        assert_eq!(api_token, "token-123");
        assert_eq!(account_id, "acct-456");
    }
}
