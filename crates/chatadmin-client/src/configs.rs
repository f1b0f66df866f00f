//! Configs resource client.
//!
//! Configs is a singleton: fetched with no id, stored whole via POST.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use chatadmin_core::AppResult;
use chatadmin_entity::Configs;

use crate::envelope::MutationStatus;
use crate::http::ApiClient;

/// Operations on the global configuration record.
#[async_trait]
pub trait ConfigsApi: Send + Sync {
    /// Fetch the configuration record.
    async fn get(&self) -> AppResult<Configs>;

    /// Store the full configuration record.
    async fn store(&self, configs: &Configs) -> AppResult<MutationStatus>;

    /// Probe connectivity with the given configuration's credentials.
    async fn test_connection(&self, configs: &Configs) -> AppResult<MutationStatus>;
}

#[async_trait]
impl<T: ConfigsApi + ?Sized> ConfigsApi for Arc<T> {
    async fn get(&self) -> AppResult<Configs> {
        (**self).get().await
    }

    async fn store(&self, configs: &Configs) -> AppResult<MutationStatus> {
        (**self).store(configs).await
    }

    async fn test_connection(&self, configs: &Configs) -> AppResult<MutationStatus> {
        (**self).test_connection(configs).await
    }
}

/// HTTP implementation of [`ConfigsApi`] against `/configs`.
#[derive(Debug, Clone)]
pub struct ConfigsClient {
    api: ApiClient,
}

impl ConfigsClient {
    /// Create a configs client over the shared API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ConfigsApi for ConfigsClient {
    async fn get(&self) -> AppResult<Configs> {
        self.api.request(Method::GET, "/configs").await
    }

    async fn store(&self, configs: &Configs) -> AppResult<MutationStatus> {
        self.api.request_json(Method::POST, "/configs", configs).await
    }

    async fn test_connection(&self, configs: &Configs) -> AppResult<MutationStatus> {
        self.api
            .request_json(Method::POST, "/configs/test-connection", configs)
            .await
    }
}
