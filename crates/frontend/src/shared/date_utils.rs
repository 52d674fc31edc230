//! Timestamp formatting for tables.

use chrono::{DateTime, NaiveDate, Utc};

/// `"2024-03-15T14:02:26.123Z"` -> `"15 Mar 2024 14:02"`. Unparseable input
/// is shown as-is.
pub fn format_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt.with_timezone(&Utc).format("%d %b %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `"2024-03-15"` or a full timestamp -> `"15 Mar 2024"`.
pub fn format_date(raw: &str) -> String {
    let date_part = raw.trim().split('T').next().unwrap_or_default();
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Optional timestamp column, `-` when absent.
pub fn format_optional(raw: Option<&str>) -> String {
    raw.filter(|s| !s.trim().is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15 Mar 2024 14:02");
        assert_eq!(format_datetime("2024-03-15T21:02:26+07:00"), "15 Mar 2024 14:02");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_optional(None), "-");
        assert_eq!(format_optional(Some(" ")), "-");
    }
}
