//! Timestamp helpers.
//!
//! Plan and configs timestamps travel as strings holding the first 19
//! characters of an ISO-8601 datetime: seconds precision, no timezone
//! offset suffix.

use chrono::{DateTime, NaiveDateTime, Utc};

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current UTC time in the wire format.
pub fn now() -> String {
    format_datetime(Utc::now())
}

/// Format a datetime in the wire format.
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.format(WIRE_FORMAT).to_string()
}

/// Truncate a full ISO-8601 string to the wire format (first 19 characters).
pub fn truncate_datetime(datetime: &str) -> String {
    datetime.chars().take(19).collect()
}

/// Long-form human-readable rendering of a wire-format timestamp, for
/// display next to each plan. Falls back to the raw string when it does
/// not parse.
pub fn human_datetime(datetime: &str) -> String {
    match NaiveDateTime::parse_from_str(&truncate_datetime(datetime), WIRE_FORMAT) {
        Ok(parsed) => parsed.format("%-d %B %Y, %H:%M:%S").to_string(),
        Err(_) => datetime.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_has_seconds_precision_no_offset() {
        let stamp = now();
        assert_eq!(stamp.len(), 19);
        assert!(!stamp.ends_with('Z'));
        assert_eq!(stamp.as_bytes()[10], b'T');
    }

    #[test]
    fn test_truncate_strips_offset() {
        assert_eq!(
            truncate_datetime("2025-01-15T10:30:00.000Z"),
            "2025-01-15T10:30:00"
        );
        assert_eq!(truncate_datetime("2025-01-15"), "2025-01-15");
    }

    #[test]
    fn test_human_datetime() {
        assert_eq!(
            human_datetime("2025-01-15T10:30:00"),
            "15 January 2025, 10:30:00"
        );
    }

    #[test]
    fn test_human_datetime_falls_back_on_garbage() {
        assert_eq!(human_datetime("not a date"), "not a date");
    }
}
