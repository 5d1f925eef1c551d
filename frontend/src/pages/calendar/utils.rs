use chrono::{DateTime, Days, NaiveDate};
use chrono_tz::Tz;

use crate::api::{CalendarItemKind, RawCalendarItem};
use crate::config;
use crate::pages::calendar::types::{
    ClassifiedEvent, DateParseError, EventSet, HolidaySet, Rejection, SelectionOutcome,
    SelectionRange,
};
use crate::utils::time::{is_weekend, local_date_in, ISO_DATE_FORMAT};

/// Accepts a plain `yyyy-mm-dd` day or an RFC 3339 timestamp, which is moved
/// into `tz` before its calendar day is taken.
pub fn parse_item_date(item: &RawCalendarItem, tz: Tz) -> Result<NaiveDate, DateParseError> {
    let raw = item.date.trim();
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|instant| local_date_in(tz, instant))
        })
        .ok_or_else(|| DateParseError {
            name: item.name.clone(),
            raw: item.date.clone(),
        })
}

pub fn classify(items: &[RawCalendarItem]) -> (HolidaySet, EventSet) {
    classify_in(items, config::app_time_zone())
}

/// Splits records by their type tag. Items whose date cannot be parsed are
/// logged and left out of both sets.
pub fn classify_in(items: &[RawCalendarItem], tz: Tz) -> (HolidaySet, EventSet) {
    let mut holidays = Vec::new();
    let mut events = Vec::new();
    for item in items {
        let date = match parse_item_date(item, tz) {
            Ok(date) => date,
            Err(err) => {
                log::warn!("Skipping calendar item: {}", err);
                continue;
            }
        };
        let entry = ClassifiedEvent::single_day(item.name.clone(), date);
        match item.kind {
            CalendarItemKind::Holiday => holidays.push(entry),
            CalendarItemKind::Event => events.push(entry),
        }
    }
    (holidays.into_iter().collect(), events.into_iter().collect())
}

/// Events first, then holidays, in the order the renderer expects.
pub fn combine_events(holidays: &HolidaySet, events: &EventSet) -> Vec<ClassifiedEvent> {
    events.iter().chain(holidays.iter()).cloned().collect()
}

/// Checks a dragged slot. Only the first and the last selected day are tested
/// for weekends; weekend days strictly inside the range are allowed.
pub fn validate_selection(start: NaiveDate, end_exclusive: NaiveDate) -> SelectionOutcome {
    let Some(end) = end_exclusive.checked_sub_days(Days::new(1)) else {
        return SelectionOutcome::Rejected(Rejection::EmptyRange);
    };
    if is_weekend(start) || is_weekend(end) {
        return SelectionOutcome::Rejected(Rejection::WeekendBoundary);
    }
    if end < start {
        return SelectionOutcome::Rejected(Rejection::EmptyRange);
    }
    SelectionOutcome::Accepted(SelectionRange { start, end })
}
