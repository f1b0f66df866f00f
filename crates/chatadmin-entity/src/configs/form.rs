//! Configs edit form: raw input and the coercion boundary.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::Configs;
use crate::validation::{FieldErrors, flatten_errors};

/// The global configuration form exactly as entered.
///
/// On receipt of the authoritative server copy the form is reset to
/// mirror it field for field; there is no diffing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigsForm {
    /// API key as typed.
    pub api_key: String,
    /// Global chat ceiling (numeric string).
    pub total_chats: String,
    /// Global question ceiling (numeric string).
    pub total_questions: String,
    /// Access gate toggle.
    pub admins_only: bool,
    /// Public plan id; empty means no public plan.
    pub public_plan: String,
    /// Default plan id.
    pub default_plan: String,
}

/// Fully typed, constraint-checked configuration input produced by
/// [`ConfigsForm::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ConfigsInput {
    /// Secret API key.
    #[validate(length(min = 1, message = "API Key is required"))]
    pub api_key: String,
    /// Global chat ceiling; zero is the floor, no -1 sentinel.
    #[validate(range(min = 0, message = "Total chats must be 0 or greater"))]
    pub total_chats: i64,
    /// Global question ceiling.
    #[validate(range(min = 0, message = "Total questions must be 0 or greater"))]
    pub total_questions: i64,
    /// Access gate.
    pub admins_only: bool,
    /// Public plan reference; `None` when not configured.
    pub public_plan: Option<String>,
    /// Default plan reference. Must name an existing plan; the selection
    /// control is populated from the authoritative plan list, and the
    /// schema itself deliberately does not check membership.
    #[validate(length(min = 1, message = "Default plan is required"))]
    pub default_plan: String,
}

impl ConfigsForm {
    /// Reset the form to exactly mirror the server copy.
    pub fn from_configs(configs: &Configs) -> Self {
        Self {
            api_key: configs.api_key.clone(),
            total_chats: configs.total_chats.to_string(),
            total_questions: configs.total_questions.to_string(),
            admins_only: configs.admins_only,
            public_plan: configs.public_plan.clone().unwrap_or_default(),
            default_plan: configs.default_plan.clone(),
        }
    }

    /// Coerce and validate the raw form in one pass, collecting every
    /// violated field.
    pub fn parse(&self) -> Result<ConfigsInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let total_chats = coerce_ceiling(&self.total_chats, "total_chats", "Total chats", &mut errors);
        let total_questions = coerce_ceiling(
            &self.total_questions,
            "total_questions",
            "Total questions",
            &mut errors,
        );

        let public_plan = match self.public_plan.trim() {
            "" => None,
            id => Some(id.to_string()),
        };

        let input = ConfigsInput {
            api_key: self.api_key.trim().to_string(),
            total_chats,
            total_questions,
            admins_only: self.admins_only,
            public_plan,
            default_plan: self.default_plan.trim().to_string(),
        };

        if let Err(violations) = input.validate() {
            errors.merge(flatten_errors(&violations));
        }

        if errors.is_empty() { Ok(input) } else { Err(errors) }
    }
}

fn coerce_ceiling(raw: &str, field: &str, display: &str, errors: &mut FieldErrors) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.insert(field, format!("{display} is required"));
        return 0;
    }
    match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            errors.insert(field, format!("{display} must be a whole number"));
            0
        }
    }
}
