use chrono::NaiveDate;

use crate::pages::calendar::types::{ClassifiedEvent, HolidaySet};
use crate::utils::time::is_weekend;

pub const DISABLED_DAY_CLASS: &str = "pointer-events-none";
pub const HOLIDAY_EVENT_CLASS: &str = "!bg-red-500 !mt-2";
pub const NORMAL_EVENT_CLASS: &str = "bg-blue-500 !mt-2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStyle {
    Interactive,
    Disabled,
}

impl DayStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            DayStyle::Interactive => "",
            DayStyle::Disabled => DISABLED_DAY_CLASS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStyle {
    Holiday,
    Normal,
}

impl EventStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            EventStyle::Holiday => HOLIDAY_EVENT_CLASS,
            EventStyle::Normal => NORMAL_EVENT_CLASS,
        }
    }
}

pub fn day_style(holidays: &HolidaySet, date: NaiveDate) -> DayStyle {
    if holidays.contains_date(date) || is_weekend(date) {
        DayStyle::Disabled
    } else {
        DayStyle::Interactive
    }
}

pub fn event_style(holidays: &HolidaySet, event: &ClassifiedEvent) -> EventStyle {
    if holidays.contains_title(&event.title) {
        EventStyle::Holiday
    } else {
        EventStyle::Normal
    }
}
