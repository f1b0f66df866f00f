//! Response envelopes.
//!
//! The API wraps mutation results so business success is distinguishable
//! from failure independent of HTTP status: saves answer with `{ plan }`
//! or `{ message }`, deletes and config stores with `{ success, message? }`.

use serde::{Deserialize, Serialize};

use chatadmin_entity::Plan;

/// Envelope returned by plan create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEnvelope {
    /// The saved plan; absent means the server reported a failure.
    #[serde(default)]
    pub plan: Option<Plan>,
    /// Failure message, when present.
    #[serde(default)]
    pub message: Option<String>,
}

impl PlanEnvelope {
    /// The failure message, or a fallback when the server sent none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}

/// Envelope returned by plan delete, configs store, and the connection
/// probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationStatus {
    /// Whether the operation succeeded.
    #[serde(default)]
    pub success: bool,
    /// Failure (or informational) message, when present.
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationStatus {
    /// The message, or a fallback when the server sent none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_envelope_tolerates_missing_keys() {
        let envelope: PlanEnvelope = serde_json::from_str("{}").expect("deserialize");
        assert!(envelope.plan.is_none());
        assert_eq!(envelope.message_or("fallback"), "fallback");
    }

    #[test]
    fn test_mutation_status_defaults_to_failure() {
        let status: MutationStatus = serde_json::from_str("{}").expect("deserialize");
        assert!(!status.success);
    }

    #[test]
    fn test_failure_message_passthrough() {
        let status: MutationStatus =
            serde_json::from_str(r#"{"success":false,"message":"in use"}"#).expect("deserialize");
        assert_eq!(status.message_or("fallback"), "in use");
    }
}
