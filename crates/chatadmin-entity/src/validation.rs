//! Flat field-error maps for form display.

use std::collections::BTreeMap;
use std::fmt;

use validator::ValidationErrors;

/// A flat mapping from top-level field name to a single human-readable
/// message, consumable directly by form-field error displays.
///
/// Inserting a second message for a field replaces the first, so when a
/// field carries several violations the last-emitted one wins. The map is
/// ordered so error listings print deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Record a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(field.into(), message.into());
    }

    /// Clear the message for a field, if any.
    pub fn remove(&mut self, field: &str) {
        self.entries.remove(field);
    }

    /// Look up the message for a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Whether any field has an error.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Absorb all entries from another map, replacing on collision.
    pub fn merge(&mut self, other: FieldErrors) {
        self.entries.extend(other.entries);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Flatten a structured multi-violation failure into a [`FieldErrors`] map.
///
/// Violations are keyed by their first path segment (the top-level field
/// name). Within a field the validator preserves emission order, and the
/// last-emitted message wins.
pub fn flatten_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut flat = FieldErrors::default();
    for (field, violations) in errors.field_errors() {
        if let Some(last) = violations.last() {
            let message = last
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            flat.insert(field.to_string(), message);
        }
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn violation(code: &'static str, message: &'static str) -> ValidationError {
        let mut err = ValidationError::new(code);
        err.message = Some(message.into());
        err
    }

    #[test]
    fn test_flatten_single_violation() {
        let mut errors = ValidationErrors::new();
        errors.add("name".into(), violation("length", "Plan name is required"));

        let flat = flatten_errors(&errors);
        assert_eq!(flat.get("name"), Some("Plan name is required"));
        assert_eq!(flat.len(), 1);
    }

    #[test]
    fn test_flatten_same_field_last_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("name".into(), violation("length", "Plan name is required"));
        errors.add("name".into(), violation("type", "Must be a string"));

        let flat = flatten_errors(&errors);
        assert_eq!(flat.get("name"), Some("Must be a string"));
        assert_eq!(flat.len(), 1);
    }

    #[test]
    fn test_flatten_missing_message_falls_back() {
        let mut errors = ValidationErrors::new();
        errors.add("period".into(), ValidationError::new("range"));

        let flat = flatten_errors(&errors);
        assert_eq!(flat.get("period"), Some("period is invalid"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut flat = FieldErrors::default();
        flat.insert("total_chats", "Total chats is required");
        flat.insert("total_chats", "Total chats must be a whole number");
        assert_eq!(
            flat.get("total_chats"),
            Some("Total chats must be a whole number")
        );
    }

    #[test]
    fn test_display_is_ordered() {
        let mut flat = FieldErrors::default();
        flat.insert("b_field", "second");
        flat.insert("a_field", "first");
        assert_eq!(flat.to_string(), "a_field: first; b_field: second");
    }
}
