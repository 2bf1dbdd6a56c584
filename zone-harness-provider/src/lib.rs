//! # zone-harness-provider
//!
//! DNS zone provider abstraction for the zone acceptance harness: the small
//! management surface the harness needs to create disposable hosted zones,
//! inspect their record sets, and tear them down again.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zone_harness_provider::{create_provider, ProviderCredentials, ZoneProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a provider from credentials
//!     let credentials = ProviderCredentials::Cloudflare {
//!         api_token: "your-token".to_string(),
//!         account_id: "your-account".to_string(),
//!     };
//!     let provider = create_provider(credentials)?;
//!
//!     // 2. Create a disposable zone (the reference is an idempotency token)
//!     let zone = provider.create_zone("1a2b3c.example.com", "1a2b3c").await?;
//!
//!     // 3. Inspect and tear down
//!     for set in provider.list_record_sets(&zone.id).await? {
//!         for line in set.bind_lines() {
//!             println!("{line}");
//!         }
//!     }
//!     provider.delete_zone(&zone.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried
//! automatically with exponential backoff up to a high ceiling, so throttling
//! from a shared API does not surface as a spurious failure.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::ZoneProvider;

// Re-export types
pub use types::{
    BatchDeleteFailure, BatchDeleteResult, ProviderCredentials, ProviderZone, RecordSet,
    RecordType,
};

// Re-export concrete providers
pub use providers::CloudflareProvider;
