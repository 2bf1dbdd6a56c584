//! Cloudflare HTTP request methods.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{DEFAULT_MAX_RETRIES, HttpUtils};
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::{CF_API_BASE, CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    /// Sends a prepared request, retries transient failures, and unwraps the
    /// Cloudflare response envelope.
    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        method: &str,
        path: &str,
        zone: Option<&str>,
    ) -> Result<CloudflareResponse<T>> {
        let builder = builder.header("Authorization", format!("Bearer {}", self.api_token));
        let (_status, text) = HttpUtils::execute_request_with_retry(
            builder,
            self.provider_name(),
            method,
            path,
            DEFAULT_MAX_RETRIES,
        )
        .await?;

        let response: CloudflareResponse<T> = HttpUtils::parse_json(&text, self.provider_name())?;
        if response.success {
            return Ok(response);
        }

        let raw = response
            .errors
            .as_ref()
            .and_then(|errors| errors.first())
            .map_or_else(
                || RawApiError::with_code(String::new(), "Unknown error"),
                |e| RawApiError::with_code(e.code.to_string(), e.message.clone()),
            );
        log::warn!("[{}] API error: {}", self.provider_name(), raw.message);
        Err(self.map_error(raw, zone))
    }

    /// GET over every page of a paginated collection endpoint.
    ///
    /// `path` may already carry query parameters; paging parameters are
    /// appended with the right separator.
    pub(crate) async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        per_page: u32,
        zone: Option<&str>,
    ) -> Result<Vec<T>> {
        let separator = if path.contains('?') { '&' } else { '?' };
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            let paged = format!("{path}{separator}page={page}&per_page={per_page}");
            let url = format!("{CF_API_BASE}{paged}");
            let response = self
                .send::<Vec<T>>(self.client.get(&url), "GET", &paged, zone)
                .await?;

            let batch = response.result.unwrap_or_default();
            let fetched = batch.len() as u32;
            items.extend(batch);

            let total = response
                .result_info
                .as_ref()
                .map_or(0, |info| info.total_count);
            if fetched < per_page || (items.len() as u32) >= total {
                return Ok(items);
            }
            page += 1;
        }
    }

    /// POST with a JSON body, returning the unwrapped `result`.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        zone: Option<&str>,
    ) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        let response = self
            .send::<T>(self.client.post(&url).json(body), "POST", path, zone)
            .await?;
        response.result.ok_or_else(|| ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: format!("missing result for POST {path}"),
        })
    }

    /// DELETE, discarding the response payload.
    pub(crate) async fn delete_request(&self, path: &str, zone: Option<&str>) -> Result<()> {
        let url = format!("{CF_API_BASE}{path}");
        self.send::<serde_json::Value>(self.client.delete(&url), "DELETE", path, zone)
            .await?;
        Ok(())
    }
}
