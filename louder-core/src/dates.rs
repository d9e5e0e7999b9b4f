//! Calendar-day helpers for event dates.
//!
//! Event dates arrive as free text. Anything that does not start with an
//! ISO `YYYY-MM-DD` date is treated as happening today, so a malformed row
//! never drops out of the listing and never surfaces an error.

use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime, Weekday};

/// The current calendar day in the local timezone, falling back to UTC when
/// the local offset cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Parse an event date, substituting `today` when it is missing or malformed.
///
/// A trailing time component (`2025-03-01T19:00:00`) is ignored.
pub fn parse_event_date(raw: Option<&str>, today: Date) -> Date {
    raw.and_then(parse_date_prefix).unwrap_or_else(|| {
        tracing::trace!(raw = ?raw, "unparseable event date, using today");
        today
    })
}

fn parse_date_prefix(raw: &str) -> Option<Date> {
    let prefix = raw.trim().get(..10)?;
    Date::parse(prefix, format_description!("[year]-[month]-[day]")).ok()
}

/// Saturday or Sunday.
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// `date` lies in `[today, today + days]`, both ends inclusive.
pub fn is_within_next_days(date: Date, today: Date, days: i64) -> bool {
    date >= today && date <= today.saturating_add(Duration::days(days))
}

pub fn is_same_month(date: Date, today: Date) -> bool {
    date.month() == today.month() && date.year() == today.year()
}

pub fn tomorrow(today: Date) -> Date {
    today.saturating_add(Duration::days(1))
}

/// Three-letter English month name, as shown on event cards.
pub fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_event_date() {
        let today = date!(2025 - 03 - 05);
        assert_eq!(
            parse_event_date(Some("2025-03-01"), today),
            date!(2025 - 03 - 01)
        );
        assert_eq!(
            parse_event_date(Some("2025-03-01T19:30:00"), today),
            date!(2025 - 03 - 01)
        );
        assert_eq!(parse_event_date(Some("TBA"), today), today);
        assert_eq!(parse_event_date(Some("2025-13-40"), today), today);
        assert_eq!(parse_event_date(Some(""), today), today);
        assert_eq!(parse_event_date(None, today), today);
    }

    #[test]
    fn test_weekend() {
        // 2025-03-08 is a Saturday.
        assert!(is_weekend(date!(2025 - 03 - 08)));
        assert!(is_weekend(date!(2025 - 03 - 09)));
        assert!(!is_weekend(date!(2025 - 03 - 10)));
    }

    #[test]
    fn test_within_next_days_is_inclusive() {
        let today = date!(2025 - 03 - 05);
        assert!(is_within_next_days(today, today, 7));
        assert!(is_within_next_days(date!(2025 - 03 - 12), today, 7));
        assert!(!is_within_next_days(date!(2025 - 03 - 13), today, 7));
        assert!(!is_within_next_days(date!(2025 - 03 - 04), today, 7));
    }

    #[test]
    fn test_same_month_needs_same_year() {
        let today = date!(2025 - 03 - 05);
        assert!(is_same_month(date!(2025 - 03 - 31), today));
        assert!(!is_same_month(date!(2024 - 03 - 05), today));
        assert!(!is_same_month(date!(2025 - 04 - 01), today));
    }

    #[test]
    fn test_tomorrow_crosses_month() {
        assert_eq!(tomorrow(date!(2025 - 02 - 28)), date!(2025 - 03 - 01));
    }
}
