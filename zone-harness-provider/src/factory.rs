//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::CloudflareProvider;
use crate::traits::ZoneProvider;
use crate::types::ProviderCredentials;

/// Creates a [`ZoneProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`]
/// variant. The returned provider is wrapped in `Arc<dyn ZoneProvider>` for
/// easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use zone_harness_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::Cloudflare {
///     api_token: "your-token".to_string(),
///     account_id: "your-account".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn ZoneProvider>> {
    match credentials {
        ProviderCredentials::Cloudflare {
            api_token,
            account_id,
        } => Ok(Arc::new(CloudflareProvider::new(api_token, account_id))),
    }
}
