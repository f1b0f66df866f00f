//! Plan resource client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use chatadmin_core::{AppError, AppResult};
use chatadmin_entity::Plan;

use crate::envelope::{MutationStatus, PlanEnvelope};
use crate::http::ApiClient;

/// CRUD operations on the plan resource.
///
/// The HTTP implementation is [`PlansClient`]; tests substitute in-memory
/// fakes.
#[async_trait]
pub trait PlansApi: Send + Sync {
    /// Fetch all plans. No pagination.
    async fn list(&self) -> AppResult<Vec<Plan>>;

    /// Fetch one plan by identifier.
    async fn get(&self, id: &str) -> AppResult<Plan>;

    /// Create a plan. The payload carries no id; the server assigns one.
    async fn create(&self, plan: &Plan) -> AppResult<PlanEnvelope>;

    /// Replace a persisted plan.
    async fn update(&self, plan: &Plan) -> AppResult<PlanEnvelope>;

    /// Delete a plan by identifier.
    async fn delete(&self, id: &str) -> AppResult<MutationStatus>;
}

#[async_trait]
impl<T: PlansApi + ?Sized> PlansApi for Arc<T> {
    async fn list(&self) -> AppResult<Vec<Plan>> {
        (**self).list().await
    }

    async fn get(&self, id: &str) -> AppResult<Plan> {
        (**self).get(id).await
    }

    async fn create(&self, plan: &Plan) -> AppResult<PlanEnvelope> {
        (**self).create(plan).await
    }

    async fn update(&self, plan: &Plan) -> AppResult<PlanEnvelope> {
        (**self).update(plan).await
    }

    async fn delete(&self, id: &str) -> AppResult<MutationStatus> {
        (**self).delete(id).await
    }
}

/// HTTP implementation of [`PlansApi`] against `/plans`.
#[derive(Debug, Clone)]
pub struct PlansClient {
    api: ApiClient,
}

impl PlansClient {
    /// Create a plans client over the shared API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PlansApi for PlansClient {
    async fn list(&self) -> AppResult<Vec<Plan>> {
        self.api.request(Method::GET, "/plans").await
    }

    async fn get(&self, id: &str) -> AppResult<Plan> {
        self.api.request(Method::GET, &format!("/plans/{id}")).await
    }

    async fn create(&self, plan: &Plan) -> AppResult<PlanEnvelope> {
        self.api.request_json(Method::POST, "/plans", plan).await
    }

    async fn update(&self, plan: &Plan) -> AppResult<PlanEnvelope> {
        let id = plan
            .id
            .as_deref()
            .ok_or_else(|| AppError::validation("Cannot update a plan that has no id"))?;
        self.api
            .request_json(Method::PUT, &format!("/plans/{id}"), plan)
            .await
    }

    async fn delete(&self, id: &str) -> AppResult<MutationStatus> {
        self.api
            .request(Method::DELETE, &format!("/plans/{id}"))
            .await
    }
}
