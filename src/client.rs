//! HTTP client for fetching data from API endpoints.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{error, info};

use crate::error::{ApiError, Result};
use crate::models::ApiData;
use crate::options::RequestOptions;

/// Client for fetching data from JSON-speaking API endpoints.
///
/// Each request merges its [`RequestOptions`] over the defaults (method
/// `GET`, header `Content-Type: application/json`) and reports the body
/// as [`ApiData::Json`] or [`ApiData::Text`] depending on the response
/// content type. No state is shared between requests.
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    /// Create a new ApiClient with a default HTTP client.
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Create an ApiClient on top of a preconfigured `reqwest::Client`.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Fetch data from an API endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint URL or route
    /// * `options` - Request configuration, merged over the defaults
    ///
    /// A response with a failing status becomes [`ApiError::Status`];
    /// transport and body-parsing failures propagate unchanged. Every
    /// error is logged once before it is returned. There is no retry.
    pub async fn fetch_api_data(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiData> {
        match self.execute(endpoint, options).await {
            Ok(data) => Ok(data),
            Err(e) => {
                error!("Error fetching data from {}: {}", endpoint, e);
                Err(e)
            }
        }
    }

    /// Convenience function for GET requests.
    ///
    /// Equivalent to [`fetch_api_data`](Self::fetch_api_data) with
    /// [`RequestOptions::default`].
    pub async fn get_api_data(&self, endpoint: &str) -> Result<ApiData> {
        self.fetch_api_data(endpoint, RequestOptions::default())
            .await
    }

    async fn execute(&self, endpoint: &str, options: RequestOptions) -> Result<ApiData> {
        let (method, headers, body) = options.merge_defaults();

        let mut request = self.http.request(method, endpoint).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;

        match content_type {
            Some(ct) if ct.contains("application/json") => {
                Ok(ApiData::Json(serde_json::from_str(&body)?))
            }
            other => {
                info!(
                    "Response content type is not JSON: {}",
                    other.as_deref().unwrap_or("<none>")
                );
                Ok(ApiData::Text(body))
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    // Tests are in tests/client_test.rs
}
