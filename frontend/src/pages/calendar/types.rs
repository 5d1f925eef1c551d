use chrono::NaiveDate;
use thiserror::Error;

use crate::utils::time::format_iso_date;

/// A single-day entry handed to the grid renderer. `start == end` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassifiedEvent {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ClassifiedEvent {
    pub fn single_day(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            start: date,
            end: date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    entries: Vec<ClassifiedEvent>,
}

impl HolidaySet {
    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedEvent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|holiday| holiday.start == date)
    }

    /// Exact string match. Two holidays sharing a name cannot be told apart.
    pub fn contains_title(&self, title: &str) -> bool {
        self.entries.iter().any(|holiday| holiday.title == title)
    }
}

impl FromIterator<ClassifiedEvent> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = ClassifiedEvent>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSet {
    entries: Vec<ClassifiedEvent>,
}

impl EventSet {
    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedEvent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ClassifiedEvent> for EventSet {
    fn from_iter<I: IntoIterator<Item = ClassifiedEvent>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date {raw:?} for calendar item {name:?}")]
pub struct DateParseError {
    pub name: String,
    pub raw: String,
}

/// Inclusive, weekday-bounded range produced by a validated drag selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SelectionRange {
    pub fn start_iso(&self) -> String {
        format_iso_date(self.start)
    }

    pub fn end_iso(&self) -> String {
        format_iso_date(self.end)
    }
}

/// Slot reported by the grid renderer; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSelection {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    WeekendBoundary,
    EmptyRange,
}

pub const WEEKEND_SELECTION_MESSAGE: &str =
    "You cannot select a date range that starts or ends on a weekend.";

impl Rejection {
    /// Text shown to the user, if this rejection is surfaced at all.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Rejection::WeekendBoundary => Some(WEEKEND_SELECTION_MESSAGE),
            Rejection::EmptyRange => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Accepted(SelectionRange),
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Month,
}
