//! Explicit field-by-field reconciliation for saves.
//!
//! Precedence, lowest to highest: a blank skeleton, the persisted record,
//! the validated form input, and finally a fresh update timestamp. The
//! precedence is spelled out per field here rather than left to a generic
//! merge utility.

use chatadmin_entity::{Configs, ConfigsInput, Plan, PlanInput};

/// Build the plan record to submit.
///
/// `id` and `created_at` always come from the persisted record when one
/// exists (they are never edited); when creating, the id stays unset for
/// the server to assign and `created_at` is freshly generated. Every
/// form-carried field takes the validated input value, and `updated_at`
/// is always fresh.
pub fn merge_plan(existing: Option<&Plan>, input: &PlanInput, now: &str) -> Plan {
    let (id, created_at) = match existing {
        Some(plan) => (plan.id.clone(), plan.created_at.clone()),
        None => (None, now.to_string()),
    };

    Plan {
        id,
        name: input.name.clone(),
        total_chats: input.total_chats,
        total_questions: input.total_questions,
        question_size: input.question_size,
        history_size: input.history_size,
        period: input.period,
        created_at,
        updated_at: now.to_string(),
    }
}

/// Build the configs record to submit.
///
/// The configs form mirrors the server copy exactly on reset, so by the
/// time input is validated every field is form-carried; only
/// `modified_at` is generated here.
pub fn merge_configs(input: &ConfigsInput, now: &str) -> Configs {
    Configs {
        api_key: input.api_key.clone(),
        total_chats: input.total_chats,
        total_questions: input.total_questions,
        admins_only: input.admins_only,
        public_plan: input.public_plan.clone(),
        default_plan: input.default_plan.clone(),
        modified_at: now.to_string(),
    }
}
