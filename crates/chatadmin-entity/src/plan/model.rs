//! Plan entity model.

use serde::{Deserialize, Serialize};

use super::period::PlanPeriod;

/// Sentinel quota value meaning "unlimited".
pub const UNLIMITED_QUOTA: i64 = -1;

/// A subscription plan: a named bundle of usage quotas with a billing
/// period, assignable to chat-bot users.
///
/// Quota fields are either [`UNLIMITED_QUOTA`] or a non-negative integer.
/// `id` is assigned by the backend on first save and never mutated after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Backend-assigned identifier; absent until the plan is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Plan label shown to users.
    pub name: String,
    /// Number of chats allowed per period.
    pub total_chats: i64,
    /// Number of questions allowed per period.
    pub total_questions: i64,
    /// Maximum question size in words.
    pub question_size: i64,
    /// Number of chat history items retained.
    pub history_size: i64,
    /// Billing period.
    pub period: PlanPeriod,
    /// When the plan was first saved (wire-format timestamp).
    #[serde(default)]
    pub created_at: String,
    /// When the plan was last saved (wire-format timestamp).
    #[serde(default)]
    pub updated_at: String,
}

impl Plan {
    /// Whether the plan has been persisted by the backend.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Plan {
        Plan {
            id: Some("42".to_string()),
            name: "Basic".to_string(),
            total_chats: 100,
            total_questions: 1000,
            question_size: 50,
            history_size: 10,
            period: PlanPeriod::Month,
            created_at: "2025-01-15T10:30:00".to_string(),
            updated_at: "2025-01-20T08:00:00".to_string(),
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["totalChats"], 100);
        assert_eq!(json["questionSize"], 50);
        assert_eq!(json["historySize"], 10);
        assert_eq!(json["period"], "month");
        assert_eq!(json["createdAt"], "2025-01-15T10:30:00");
    }

    #[test]
    fn test_unpersisted_plan_serializes_without_id() {
        let mut plan = sample();
        plan.id = None;
        let json = serde_json::to_value(&plan).expect("serialize");
        assert!(json.get("id").is_none());
        assert!(!plan.is_persisted());
    }

    #[test]
    fn test_serde_roundtrip() {
        let plan = sample();
        let json = serde_json::to_string(&plan).expect("serialize");
        let parsed: Plan = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, plan);
    }
}
