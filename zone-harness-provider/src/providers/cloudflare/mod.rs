//! Cloudflare zone provider.

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{CloudflareDnsRecord, CloudflareResponse, CloudflareZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Maximum page size for the Zones API.
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;
/// Maximum page size for the DNS Records API.
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// Cloudflare-backed [`ZoneProvider`](crate::ZoneProvider).
///
/// Zone and record names are reported fully qualified with a trailing dot.
/// Cloudflare has no native caller-reference parameter on zone creation;
/// creation is idempotent by zone name and the reference is only logged.
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) account_id: String,
}

impl CloudflareProvider {
    #[must_use]
    pub fn new(api_token: String, account_id: String) -> Self {
        Self {
            client: create_http_client(),
            api_token,
            account_id,
        }
    }
}
