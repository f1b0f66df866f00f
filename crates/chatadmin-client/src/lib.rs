//! Typed wrappers over the chat-bot plugin's admin JSON API.
//!
//! Each resource gets a client with the same shape: plain CRUD calls that
//! translate response bodies into domain types. There are no retries, no
//! caching, and no cancellation; callers await each call to completion
//! before touching UI state. Business failures travel in the response
//! envelopes, not in [`chatadmin_core::AppError`].

pub mod configs;
pub mod envelope;
pub mod http;
pub mod plans;

pub use configs::{ConfigsApi, ConfigsClient};
pub use envelope::{MutationStatus, PlanEnvelope};
pub use http::ApiClient;
pub use plans::{PlansApi, PlansClient};
