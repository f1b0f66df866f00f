//! Display-only derivations for quota values.
//!
//! None of these affect stored data; they only shape what the list view
//! renders.

use crate::plan::UNLIMITED_QUOTA;

/// Render a quota value: the -1 sentinel becomes "Unlimited", everything
/// else gets thousands grouping.
pub fn format_quota(value: i64) -> String {
    if value == UNLIMITED_QUOTA {
        return "Unlimited".to_string();
    }
    group_thousands(value)
}

/// Insert a comma every three digits.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
