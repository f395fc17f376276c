use chrono::{Duration, NaiveDate};

/// Human label for a forecast date: "Today", "Tomorrow", or an en-US short
/// weekday/month/day string such as "Thu, Aug 28".
///
/// Comparison is by calendar date only, never time-of-day. `today` is passed
/// in rather than read from the clock so callers and tests stay deterministic.
pub fn relative_date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}
