//! Plan edit form: raw input and the coercion boundary.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::Plan;
use super::period::PlanPeriod;
use crate::validation::{FieldErrors, flatten_errors};

/// The plan edit form exactly as entered: every field is a raw string.
///
/// `parse` is the single coercion boundary between this and the typed
/// domain values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanForm {
    /// Plan name.
    pub name: String,
    /// Number of chats (numeric string, `-1` for unlimited).
    pub total_chats: String,
    /// Number of questions (numeric string, `-1` for unlimited).
    pub total_questions: String,
    /// Question size in words (numeric string, `-1` for unlimited).
    pub question_size: String,
    /// History items to retain (numeric string, `-1` for unlimited).
    pub history_size: String,
    /// Billing period wire value.
    pub period: String,
}

/// Fully typed, constraint-checked plan input produced by
/// [`PlanForm::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PlanInput {
    /// Plan name.
    #[validate(length(min = 1, message = "Plan name is required"))]
    pub name: String,
    /// Number of chats per period.
    #[validate(range(min = -1, message = "Total chats must be -1 or greater"))]
    pub total_chats: i64,
    /// Number of questions per period.
    #[validate(range(min = -1, message = "Total questions must be -1 or greater"))]
    pub total_questions: i64,
    /// Maximum question size in words.
    #[validate(range(min = -1, message = "Question size must be -1 or greater"))]
    pub question_size: i64,
    /// History items retained.
    #[validate(range(min = -1, message = "History size must be -1 or greater"))]
    pub history_size: i64,
    /// Billing period.
    pub period: PlanPeriod,
}

impl PlanForm {
    /// Pre-populate the form from a persisted plan, for editing.
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            total_chats: plan.total_chats.to_string(),
            total_questions: plan.total_questions.to_string(),
            question_size: plan.question_size.to_string(),
            history_size: plan.history_size.to_string(),
            period: plan.period.as_str().to_string(),
        }
    }

    /// Coerce and validate the raw form in one pass.
    ///
    /// Every violated field is reported: numeric fields that fail to parse
    /// get a field-specific message, fields that parse but break a
    /// constraint get the constraint's message. No side effects.
    pub fn parse(&self) -> Result<PlanInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let total_chats = coerce_quota(&self.total_chats, "total_chats", "Total chats", &mut errors);
        let total_questions = coerce_quota(
            &self.total_questions,
            "total_questions",
            "Total questions",
            &mut errors,
        );
        let question_size = coerce_quota(
            &self.question_size,
            "question_size",
            "Question size",
            &mut errors,
        );
        let history_size = coerce_quota(
            &self.history_size,
            "history_size",
            "History size",
            &mut errors,
        );

        let period = match self.period.trim().parse::<PlanPeriod>() {
            Ok(period) => period,
            Err(err) => {
                if self.period.trim().is_empty() {
                    errors.insert("period", "Billing period is required");
                } else {
                    errors.insert("period", err.message);
                }
                PlanPeriod::Month
            }
        };

        let input = PlanInput {
            name: self.name.trim().to_string(),
            total_chats,
            total_questions,
            question_size,
            history_size,
            period,
        };

        if let Err(violations) = input.validate() {
            errors.merge(flatten_errors(&violations));
        }

        if errors.is_empty() { Ok(input) } else { Err(errors) }
    }
}

/// Coerce one numeric quota field, recording a field-specific message on
/// failure. Fields that fail coercion are substituted with 0 so the
/// remaining constraints can still be checked in the same pass.
fn coerce_quota(raw: &str, field: &str, display: &str, errors: &mut FieldErrors) -> i64 {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PlanForm {
        PlanForm {
            name: "Basic".to_string(),
            total_chats: "100".to_string(),
            total_questions: "1000".to_string(),
            question_size: "50".to_string(),
            history_size: "10".to_string(),
            period: "month".to_string(),
        }
    }

    #[test]
    fn test_parse_coerces_numeric_strings() {
        let input = valid_form().parse().expect("should parse");
        assert_eq!(input.total_chats, 100);
        assert_eq!(input.total_questions, 1000);
        assert_eq!(input.question_size, 50);
        assert_eq!(input.history_size, 10);
        assert_eq!(input.period, PlanPeriod::Month);
    }

    #[test]
    fn test_parse_accepts_unlimited_sentinel() {
        let mut form = valid_form();
        form.total_chats = "-1".to_string();
        let input = form.parse().expect("should parse");
        assert_eq!(input.total_chats, -1);
    }

    #[test]
    fn test_empty_name_fails_with_field_message() {
        let mut form = valid_form();
        form.name = "".to_string();
        let errors = form.parse().unwrap_err();
        assert_eq!(errors.get("name"), Some("Plan name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_whitespace_name_fails() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        let errors = form.parse().unwrap_err();
        assert_eq!(errors.get("name"), Some("Plan name is required"));
    }

    #[test]
    fn test_all_violations_collected_in_one_pass() {
        let errors = PlanForm::default().parse().unwrap_err();
        assert_eq!(errors.get("name"), Some("Plan name is required"));
        assert_eq!(errors.get("total_chats"), Some("Total chats is required"));
        assert_eq!(
            errors.get("total_questions"),
            Some("Total questions is required")
        );
        assert_eq!(errors.get("question_size"), Some("Question size is required"));
        assert_eq!(errors.get("history_size"), Some("History size is required"));
        assert_eq!(errors.get("period"), Some("Billing period is required"));
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_non_numeric_quota_gets_specific_message() {
        let mut form = valid_form();
        form.total_chats = "lots".to_string();
        let errors = form.parse().unwrap_err();
        assert_eq!(
            errors.get("total_chats"),
            Some("Total chats must be a whole number")
        );
    }

    #[test]
    fn test_below_sentinel_breaks_range_constraint() {
        let mut form = valid_form();
        form.history_size = "-2".to_string();
        let errors = form.parse().unwrap_err();
        assert_eq!(
            errors.get("history_size"),
            Some("History size must be -1 or greater")
        );
    }

    #[test]
    fn test_unknown_period_reports_accepted_values() {
        let mut form = valid_form();
        form.period = "quarter".to_string();
        let errors = form.parse().unwrap_err();
        let message = errors.get("period").expect("period error");
        assert!(message.contains("year, month, week, day, lifetime"));
    }

    #[test]
    fn test_from_plan_round_trips_through_parse() {
        let plan = Plan {
            id: Some("7".to_string()),
            name: "Pro".to_string(),
            total_chats: -1,
            total_questions: 5000,
            question_size: 100,
            history_size: 50,
            period: PlanPeriod::Year,
            created_at: "2025-02-01T00:00:00".to_string(),
            updated_at: "2025-02-01T00:00:00".to_string(),
        };
        let input = PlanForm::from_plan(&plan).parse().expect("should parse");
        assert_eq!(input.name, plan.name);
        assert_eq!(input.total_chats, plan.total_chats);
        assert_eq!(input.period, plan.period);
    }
}
