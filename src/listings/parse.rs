// src/listings/parse.rs
//! Parsing helpers for the semi-structured salary and posted-date strings.
//!
//! Both fields are free text on the canonical record, so every function here
//! is total: malformed input degrades to a defined default instead of an
//! error. Filtering and sorting must never fail on a badly shaped record.

use chrono::{DateTime, Utc};

/// Extract one bound of a salary range string such as "20,000 - 30,000/month".
///
/// `index` selects the bound: 0 for the minimum, 1 for the maximum. The
/// period suffix and grouping separators are ignored. Returns 0 whenever the
/// string does not carry a parsable number at that position.
pub fn parse_salary_bound(salary: &str, index: usize) -> i64 {
    let part = match salary.split(" - ").nth(index) {
        Some(part) => part,
        None => return 0,
    };

    let number = part.split('/').next().unwrap_or("");
    number
        .trim()
        .replace(['₹', ','], "")
        .parse::<i64>()
        .unwrap_or(0)
}

/// Rank a posted-date string for recency ordering; lower is more recent.
///
/// Unparsable counts fall back to a mid-bucket rank (2 days, 10 days,
/// 40 days) and unrecognized strings sink to 100 so they sort last.
pub fn recency_rank(posted_date: &str) -> i64 {
    match posted_date {
        "Today" => 0,
        "Yesterday" => 1,
        other => {
            let lower = other.to_lowercase();
            let count = other
                .split_whitespace()
                .next()
                .and_then(|token| token.parse::<i64>().ok());

            if lower.contains("day") {
                count.unwrap_or(2)
            } else if lower.contains("week") {
                count.map(|n| n * 7).unwrap_or(10)
            } else if lower.contains("month") {
                count.map(|n| n * 30).unwrap_or(40)
            } else {
                100
            }
        }
    }
}

/// Format a creation instant as the relative posted-date string.
///
/// Computed once at load time; the string is not refreshed as wall-clock
/// time passes during a session. The day count is the ceiling of the elapsed
/// time, so anything posted earlier on a previous calendar day already reads
/// "Yesterday". Future instants clamp to "Today".
pub fn relative_posted_date(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_secs = now.signed_duration_since(created_at).num_seconds().max(0);
    let diff_days = (elapsed_secs + 86_399) / 86_400;

    match diff_days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=7 => format!("{} days ago", diff_days),
        8..=30 => {
            let weeks = diff_days / 7;
            format!("{} week{} ago", weeks, if weeks == 1 { "" } else { "s" })
        }
        _ => {
            let months = diff_days / 30;
            format!("{} month{} ago", months, if months == 1 { "" } else { "s" })
        }
    }
}

/// Render an integer with thousands separators ("20000" -> "20,000"),
/// matching the salary strings the frontend displays.
pub fn format_grouped(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_parse_salary_bound_well_formed() {
        let salary = "20,000 - 30,000/month";
        assert_eq!(parse_salary_bound(salary, 0), 20000);
        assert_eq!(parse_salary_bound(salary, 1), 30000);

        let daily = "500 - 700/day";
        assert_eq!(parse_salary_bound(daily, 0), 500);
        assert_eq!(parse_salary_bound(daily, 1), 700);
    }

    #[test]
    fn test_parse_salary_bound_is_total() {
        assert_eq!(parse_salary_bound("", 0), 0);
        assert_eq!(parse_salary_bound("negotiable", 0), 0);
        assert_eq!(parse_salary_bound("negotiable", 1), 0);
        assert_eq!(parse_salary_bound("20,000/month", 1), 0);
        assert_eq!(parse_salary_bound("₹15,000 - ₹20,000/month", 0), 15000);
    }

    #[test]
    fn test_recency_rank_ordering() {
        assert_eq!(recency_rank("Today"), 0);
        assert_eq!(recency_rank("Yesterday"), 1);
        assert_eq!(recency_rank("3 days ago"), 3);
        assert_eq!(recency_rank("2 weeks ago"), 14);
        assert_eq!(recency_rank("1 week ago"), 7);
        assert_eq!(recency_rank("1 month ago"), 30);
        assert!(recency_rank("Today") < recency_rank("Yesterday"));
        assert!(recency_rank("Yesterday") < recency_rank("3 days ago"));
        assert!(recency_rank("3 days ago") < recency_rank("2 weeks ago"));
        assert!(recency_rank("2 weeks ago") < recency_rank("1 month ago"));
    }

    #[test]
    fn test_recency_rank_fallbacks() {
        assert_eq!(recency_rank("some days ago"), 2);
        assert_eq!(recency_rank("a week ago"), 10);
        assert_eq!(recency_rank("many months ago"), 40);
        assert_eq!(recency_rank("12 Jan 2025"), 100);
    }

    #[test]
    fn test_relative_posted_date_boundaries() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

        assert_eq!(relative_posted_date(now, now), "Today");
        assert_eq!(
            relative_posted_date(now - Duration::hours(20), now),
            "Yesterday"
        );
        assert_eq!(
            relative_posted_date(now - Duration::days(3), now),
            "3 days ago"
        );
        assert_eq!(
            relative_posted_date(now - Duration::days(7), now),
            "7 days ago"
        );
        assert_eq!(
            relative_posted_date(now - Duration::days(8), now),
            "1 week ago"
        );
        assert_eq!(
            relative_posted_date(now - Duration::days(30), now),
            "4 weeks ago"
        );
        assert_eq!(
            relative_posted_date(now - Duration::days(31), now),
            "1 month ago"
        );
        assert_eq!(
            relative_posted_date(now - Duration::days(95), now),
            "3 months ago"
        );
    }

    #[test]
    fn test_relative_posted_date_clamps_future() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_posted_date(now + Duration::days(2), now), "Today");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(500), "500");
        assert_eq!(format_grouped(20000), "20,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
        assert_eq!(format_grouped(-20000), "-20,000");
    }
}
