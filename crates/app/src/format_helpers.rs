//! Shared formatting utilities for table cells and summary cards.

use chrono::{DateTime, Utc};

/// Format a timestamp as "Jan 20, 2026".
pub fn format_date_human(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as "Jan 20, 2026 9:35 PM".
pub fn format_datetime_human(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Sortable key for date columns. Lexical order of RFC 3339 strings in UTC
/// matches chronological order.
pub fn sortable_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339()
}

/// Format a ratio in `[0, 1]` as a percentage with one decimal.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Signed percentage for lift figures, e.g. "+12.5%".
pub fn format_lift(lift: Option<f64>) -> String {
    match lift {
        Some(l) if l >= 0.0 => format!("+{l:.1}%"),
        Some(l) => format!("{l:.1}%"),
        None => "n/a".to_string(),
    }
}

/// Convert a snake_case string to Title Case (e.g. "failed_login" → "Failed Login").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn date_human() {
        assert_eq!(format_date_human(&at("2026-01-20T21:35:00Z")), "Jan 20, 2026");
        assert_eq!(format_date_human(&at("2026-03-05T00:00:00Z")), "Mar 5, 2026");
    }

    #[test]
    fn datetime_human_uses_twelve_hour_clock() {
        assert_eq!(
            format_datetime_human(&at("2026-01-20T21:35:00Z")),
            "Jan 20, 2026 9:35 PM"
        );
        assert_eq!(
            format_datetime_human(&at("2026-01-20T00:05:00Z")),
            "Jan 20, 2026 12:05 AM"
        );
    }

    #[test]
    fn sortable_timestamp_orders_chronologically() {
        let earlier = sortable_timestamp(&at("2026-01-20T09:00:00Z"));
        let later = sortable_timestamp(&at("2026-11-02T08:00:00Z"));
        assert!(earlier < later);
    }

    #[test]
    fn percent_and_lift() {
        assert_eq!(format_percent(0.125), "12.5%");
        assert_eq!(format_lift(Some(12.5)), "+12.5%");
        assert_eq!(format_lift(Some(-3.0)), "-3.0%");
        assert_eq!(format_lift(None), "n/a");
    }

    #[test]
    fn snake_case_title() {
        assert_eq!(format_snake_case_title("failed_login"), "Failed Login");
        assert_eq!(format_snake_case_title("single"), "Single");
        assert_eq!(format_snake_case_title(""), "");
    }
}
