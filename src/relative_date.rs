use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::truncate_day;

static ALREADY_RELATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\d{1,2}\s*(hours?|hrs?|h|days?|weeks?|months?)\s*ago$").unwrap()
});

/// Render an archive date as "Today" / "1 day ago" / "2 weeks ago" etc.
/// Strings already shaped like "N days ago" pass through untouched; future
/// or unparseable dates come back unchanged. `today` is an explicit
/// parameter so callers own the clock.
pub fn format_relative_date(date_str: &str, today: NaiveDate) -> String {
    let s = date_str.trim();
    if s.is_empty() {
        return "—".to_string();
    }
    if ALREADY_RELATIVE.is_match(s) {
        return s.to_string();
    }

    let Some(day) = truncate_day(s) else {
        return s.to_string();
    };
    let Ok(then) = NaiveDate::parse_from_str(day, "%Y-%m-%d") else {
        return s.to_string();
    };

    let diff_days = (today - then).num_days();
    match diff_days {
        d if d < 0 => s.to_string(),
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => plural(d / 7, "week"),
        d if d < 365 => plural(d / 30, "month"),
        d => plural(d / 365, "year"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{n} {unit}s ago")
    } else {
        format!("{n} {unit} ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        "2024-03-15".parse().unwrap()
    }

    #[test]
    fn blank_input_renders_a_dash() {
        assert_eq!(format_relative_date("", today()), "—");
        assert_eq!(format_relative_date("   ", today()), "—");
    }

    #[test]
    fn already_relative_strings_pass_through() {
        assert_eq!(format_relative_date("3 hours ago", today()), "3 hours ago");
        assert_eq!(format_relative_date("2 Days Ago", today()), "2 Days Ago");
        assert_eq!(format_relative_date("1 week ago", today()), "1 week ago");
    }

    #[test]
    fn day_week_month_year_buckets() {
        assert_eq!(format_relative_date("2024-03-15", today()), "Today");
        assert_eq!(format_relative_date("2024-03-14", today()), "1 day ago");
        assert_eq!(format_relative_date("2024-03-10", today()), "5 days ago");
        assert_eq!(format_relative_date("2024-03-01", today()), "2 weeks ago");
        assert_eq!(format_relative_date("2024-01-05", today()), "2 months ago");
        assert_eq!(format_relative_date("2021-03-15", today()), "3 years ago");
    }

    #[test]
    fn timestamps_truncate_before_diffing() {
        assert_eq!(
            format_relative_date("2024-03-14T22:10:00Z", today()),
            "1 day ago"
        );
    }

    #[test]
    fn future_and_unparseable_dates_come_back_unchanged() {
        assert_eq!(format_relative_date("2024-04-01", today()), "2024-04-01");
        assert_eq!(format_relative_date("next week", today()), "next week");
    }
}
