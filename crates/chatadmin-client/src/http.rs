//! Shared HTTP plumbing for the resource clients.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use chatadmin_core::{ApiConfig, AppError, AppResult};

/// Shared JSON HTTP client bound to the plugin's REST namespace.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the API configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue a bodyless request and decode the JSON response.
    ///
    /// An HTTP 404 surfaces as [`chatadmin_core::ErrorKind::NotFound`];
    /// any other response body is decoded as-is, since the API reports
    /// business failures inside its envelopes independent of status.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> AppResult<T> {
        let response = self
            .http
            .request(method, self.url(path))
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;
        self.decode(path, response).await
    }

    /// Issue a request with a JSON body and decode the JSON response.
    pub(crate) async fn request_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;
        self.decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> AppResult<T> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("Resource not found: {path}")));
        }
        tracing::debug!(path, status = %response.status(), "API response");
        response
            .json()
            .await
            .map_err(|e| {
                AppError::serialization(format!("Failed to decode response from {path}: {e}"))
            })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport_error(path: &str, err: reqwest::Error) -> AppError {
    AppError::with_source(
        chatadmin_core::ErrorKind::ExternalService,
        format!("Request to {path} failed: {err}"),
        err,
    )
}
