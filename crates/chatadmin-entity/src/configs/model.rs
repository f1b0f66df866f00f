//! Global configuration entity model.

use serde::{Deserialize, Serialize};

/// The single global configuration record for the chat-bot plugin.
///
/// One instance exists per installation; the backend owns it and the
/// admin console edits a transient copy. Unlike plan quotas, the global
/// ceilings have no -1 sentinel: zero is the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configs {
    /// Secret API key used by the plugin.
    pub api_key: String,
    /// Global ceiling on chats across all plans.
    pub total_chats: i64,
    /// Global ceiling on questions across all plans.
    pub total_questions: i64,
    /// When true, only administrators can use the chat-bot.
    #[serde(default = "default_admins_only")]
    pub admins_only: bool,
    /// Plan offered to unauthenticated users, by plan id; may be unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_plan: Option<String>,
    /// Plan assigned to new users, by plan id.
    pub default_plan: String,
    /// When the record was last saved (wire-format timestamp).
    #[serde(default)]
    pub modified_at: String,
}

fn default_admins_only() -> bool {
    true
}
