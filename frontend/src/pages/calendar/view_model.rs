use chrono::NaiveDate;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::components::toast::Toast;
use crate::config;
use crate::pages::calendar::{
    repository::CalendarRepository,
    style::{self, DayStyle, EventStyle},
    types::{ClassifiedEvent, EventSet, HolidaySet, SelectionOutcome, SlotSelection},
    utils::{classify_in, combine_events, validate_selection},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub toast: Toast,
}

/// Shared alive flag for one mounted calendar view. Work that outlives the
/// view checks it before touching any state.
#[derive(Debug, Clone)]
pub struct ViewLifetime(Rc<Cell<bool>>);

impl ViewLifetime {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    fn end(&self) {
        self.0.set(false);
    }
}

#[derive(Clone)]
pub struct CalendarViewModel {
    pub holidays: RwSignal<HolidaySet>,
    pub events: RwSignal<EventSet>,
    pub loading: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
    repository: CalendarRepository,
    lifetime: ViewLifetime,
    in_flight: Rc<Cell<bool>>,
    next_notice_id: Rc<Cell<u64>>,
}

impl CalendarViewModel {
    pub fn new(repository: CalendarRepository) -> Self {
        Self {
            holidays: create_rw_signal(HolidaySet::default()),
            events: create_rw_signal(EventSet::default()),
            loading: create_rw_signal(false),
            notice: create_rw_signal(None),
            repository,
            lifetime: ViewLifetime::new(),
            in_flight: Rc::new(Cell::new(false)),
            next_notice_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.lifetime.is_alive()
    }

    /// Fetches and classifies the holiday/event feed. A call made while another
    /// is outstanding returns immediately, and a result arriving after
    /// [`teardown`](Self::teardown) is dropped.
    pub async fn load(&self) {
        if !self.lifetime.is_alive() {
            return;
        }
        if self.in_flight.replace(true) {
            log::debug!("Holidays and events already loading; skipping fetch");
            return;
        }
        self.loading.set(true);
        let result = self.repository.fetch_all().await;
        let tz = config::await_time_zone().await;
        self.in_flight.set(false);

        if !self.lifetime.is_alive() {
            log::debug!("Calendar view torn down; discarding holidays and events");
            // The owner may already be disposed along with its signals.
            let _ = self.loading.try_set(false);
            return;
        }
        match result {
            Ok(items) => {
                let (holidays, events) = classify_in(&items, tz);
                self.holidays.set(holidays);
                self.events.set(events);
            }
            Err(err) => log::error!("Error fetching holidays and events: {}", err),
        }
        self.loading.set(false);
    }

    pub fn teardown(&self) {
        self.lifetime.end();
    }

    pub fn combined_events(&self) -> Vec<ClassifiedEvent> {
        self.holidays
            .with(|holidays| self.events.with(|events| combine_events(holidays, events)))
    }

    pub fn day_style(&self, date: NaiveDate) -> DayStyle {
        self.holidays.with(|holidays| style::day_style(holidays, date))
    }

    pub fn event_style(&self, event: &ClassifiedEvent) -> EventStyle {
        self.holidays
            .with(|holidays| style::event_style(holidays, event))
    }

    /// Validates a dragged slot; accepted ranges go to `on_select_date` as
    /// `yyyy-mm-dd` strings, weekend rejections raise a warning toast.
    pub fn handle_select_slot(
        &self,
        slot: SlotSelection,
        on_select_date: Callback<(String, String)>,
    ) -> SelectionOutcome {
        let outcome = validate_selection(slot.start, slot.end);
        match outcome {
            SelectionOutcome::Accepted(range) => {
                on_select_date.call((range.start_iso(), range.end_iso()));
            }
            SelectionOutcome::Rejected(reason) => {
                log::debug!("Rejected selection {:?}: {:?}", slot, reason);
                if let Some(message) = reason.message() {
                    self.raise_notice(Toast::warning(message));
                }
            }
        }
        outcome
    }

    /// Replaces any visible notice and returns the id needed to dismiss it.
    pub fn raise_notice(&self, toast: Toast) -> u64 {
        let id = self.next_notice_id.get().wrapping_add(1);
        self.next_notice_id.set(id);
        self.notice.set(Some(Notice { id, toast }));
        id
    }

    /// Hides the notice with `id`; a newer notice is left alone.
    pub fn dismiss_notice(&self, id: u64) {
        if !self.lifetime.is_alive() {
            return;
        }
        let current = self.notice.with_untracked(|notice| notice.as_ref().map(|n| n.id));
        if current == Some(id) {
            self.notice.set(None);
        }
    }
}
