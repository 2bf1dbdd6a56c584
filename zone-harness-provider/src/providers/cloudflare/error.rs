//! Cloudflare error mapping.

use crate::error::ProviderError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::CloudflareProvider;

/// Cloudflare error code mapping.
/// Reference: <https://api.cloudflare.com/#getting-started-responses>
impl ProviderErrorMapper for CloudflareProvider {
    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }

    fn map_error(&self, raw: RawApiError, zone: Option<&str>) -> ProviderError {
        match raw.code.as_deref() {
            // Authentication errors
            // 6003: Invalid request headers
            // 6103: Invalid format for X-Auth-Key header
            // 6111: Invalid format for Authorization header
            // 9109: Unauthorized to access requested resource
            // 10000: Authentication error
            Some("6003" | "6103" | "6111" | "9109" | "10000") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // 1061: Zone already exists
            Some("1061") => ProviderError::ZoneExists {
                provider: self.provider_name().to_string(),
                zone: zone.unwrap_or_default().to_string(),
                raw_message: Some(raw.message),
            },

            // 7000/7003: Could not route to the zone, invalid object identifier
            Some("7000" | "7003") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: zone.unwrap_or_default().to_string(),
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }
}
