//! Cloudflare API wire types.

use serde::{Deserialize, Serialize};

/// Cloudflare response envelope.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    pub errors: Option<Vec<CloudflareError>>,
    pub result_info: Option<CloudflareResultInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareResultInfo {
    pub page: u32,
    pub per_page: u32,
    pub total_count: u32,
}

/// Cloudflare zone object.
#[derive(Debug, Deserialize)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
}

/// Cloudflare DNS record object (response).
#[derive(Debug, Deserialize)]
pub struct CloudflareDnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub priority: Option<u16>,
}

/// Zone creation request body.
#[derive(Debug, Serialize)]
pub struct CreateZoneBody {
    pub name: String,
    pub account: AccountRef,
}

#[derive(Debug, Serialize)]
pub struct AccountRef {
    pub id: String,
}
