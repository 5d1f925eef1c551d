use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Weekday};
use chrono_tz::Tz;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Weeks in the month grid start on Sunday (en-US).
pub const WEEK_STARTS_ON: Weekday = Weekday::Sun;

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Formats as `yyyy-mm-dd` regardless of the runtime locale.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn local_date_in(tz: Tz, instant: DateTime<FixedOffset>) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_and_sunday_are_weekend() {
        assert!(is_weekend(date(2024, 6, 8)));
        assert!(is_weekend(date(2024, 6, 9)));
        for day in 10..=14 {
            assert!(!is_weekend(date(2024, 6, day)), "2024-06-{day} is a weekday");
        }
    }

    #[test]
    fn format_pads_month_and_day() {
        assert_eq!(format_iso_date(date(2024, 1, 5)), "2024-01-05");
        assert_eq!(format_iso_date(date(987, 12, 31)), "0987-12-31");
    }

    #[test]
    fn local_date_follows_time_zone() {
        let instant = DateTime::parse_from_rfc3339("2024-06-09T20:00:00Z").unwrap();
        assert_eq!(local_date_in(Tz::UTC, instant), date(2024, 6, 9));
        assert_eq!(local_date_in(Tz::Asia__Kolkata, instant), date(2024, 6, 10));
    }
}
