//! Utility functions for the TUI

use chrono::{DateTime, Duration, Local, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a timestamp for display
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Format a timestamp as relative time (e.g., "2 hours ago")
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(ts);

    if diff < Duration::zero() {
        return "in the future".to_string();
    }

    if diff < Duration::minutes(1) {
        return "just now".to_string();
    }

    if diff < Duration::hours(1) {
        let mins = diff.num_minutes();
        return format!("{} minute{} ago", mins, if mins == 1 { "" } else { "s" });
    }

    if diff < Duration::days(1) {
        let hours = diff.num_hours();
        return format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" });
    }

    format_timestamp(ts)
}

/// Format an hour total for report columns
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Format seconds as MM:SS for countdowns
pub fn format_countdown(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Truncate a string to a display width, with ellipsis
///
/// Width-aware so that wide characters in employee names don't overflow
/// table cells.
pub fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(300), "05:00");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(0), "00:00");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(7.5), "7.50");
        assert_eq!(format_hours(80.0), "80.00");
    }

    #[rstest]
    #[case("hello", 10, "hello")]
    #[case("hello world", 8, "hello w\u{2026}")]
    #[case("", 4, "")]
    fn test_truncate(#[case] input: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate(input, width), expected);
    }

    #[test]
    fn test_truncate_counts_display_width() {
        // Each CJK character is two columns wide
        let truncated = truncate("山田太郎", 5);
        assert_eq!(truncated, "山田\u{2026}");
    }

    #[test]
    fn test_relative_time_just_now() {
        assert_eq!(format_relative_time(Utc::now()), "just now");
    }

    #[test]
    fn test_relative_time_minutes() {
        let ts = Utc::now() - Duration::minutes(12);
        assert_eq!(format_relative_time(ts), "12 minutes ago");
    }
}
