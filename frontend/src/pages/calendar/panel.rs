use chrono::{NaiveDate, Weekday};
use leptos::*;

use crate::components::toast::ToastMessage;
use crate::pages::calendar::{
    repository::CalendarRepository,
    style::{DayStyle, EventStyle},
    types::{CalendarView, ClassifiedEvent, SlotSelection},
    view_model::CalendarViewModel,
};
use crate::utils::time::WEEK_STARTS_ON;

pub const CALENDAR_CONTAINER_CLASS: &str = "p-4 rounded-lg w-full h-[80vh]";

/// Everything the grid renderer needs to draw the month view.
#[derive(Clone)]
pub struct CalendarGridProps {
    pub events: Signal<Vec<ClassifiedEvent>>,
    pub day_prop_getter: Callback<NaiveDate, DayStyle>,
    pub event_prop_getter: Callback<ClassifiedEvent, EventStyle>,
    pub on_select_slot: Callback<SlotSelection>,
    pub views: Vec<CalendarView>,
    pub default_view: CalendarView,
    pub week_starts_on: Weekday,
    pub selectable: bool,
    pub popup: bool,
}

#[component]
pub fn FullScreenCalendar(
    on_select_date: Callback<(String, String)>,
    render_grid: Callback<CalendarGridProps, View>,
    #[prop(optional)] repository: Option<CalendarRepository>,
) -> impl IntoView {
    let view_model = CalendarViewModel::new(repository.unwrap_or_default());

    {
        let view_model = view_model.clone();
        on_cleanup(move || view_model.teardown());
    }
    {
        let view_model = view_model.clone();
        create_effect(move |_| {
            let view_model = view_model.clone();
            spawn_local(async move { view_model.load().await });
        });
    }
    {
        let view_model = view_model.clone();
        create_effect(move |_| {
            if let Some(notice) = view_model.notice.get() {
                let view_model = view_model.clone();
                let millis = u32::try_from(notice.toast.timer.as_millis()).unwrap_or(u32::MAX);
                gloo_timers::callback::Timeout::new(millis, move || {
                    view_model.dismiss_notice(notice.id)
                })
                .forget();
            }
        });
    }

    let events = {
        let view_model = view_model.clone();
        Signal::derive(move || view_model.combined_events())
    };
    let day_prop_getter = {
        let view_model = view_model.clone();
        Callback::new(move |date: NaiveDate| view_model.day_style(date))
    };
    let event_prop_getter = {
        let view_model = view_model.clone();
        Callback::new(move |event: ClassifiedEvent| view_model.event_style(&event))
    };
    let on_select_slot = {
        let view_model = view_model.clone();
        Callback::new(move |slot: SlotSelection| {
            view_model.handle_select_slot(slot, on_select_date);
        })
    };
    let toast = {
        let notice = view_model.notice;
        Signal::derive(move || notice.get().map(|notice| notice.toast))
    };
    let on_close_toast = {
        let view_model = view_model.clone();
        Callback::new(move |_| {
            if let Some(id) = view_model.notice.with_untracked(|n| n.as_ref().map(|n| n.id)) {
                view_model.dismiss_notice(id);
            }
        })
    };

    let grid = render_grid.call(CalendarGridProps {
        events,
        day_prop_getter,
        event_prop_getter,
        on_select_slot,
        views: vec![CalendarView::Month],
        default_view: CalendarView::Month,
        week_starts_on: WEEK_STARTS_ON,
        selectable: true,
        popup: true,
    });

    view! {
        <div class=CALENDAR_CONTAINER_CLASS>
            {grid}
            <ToastMessage toast=toast on_close=on_close_toast />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn full_screen_calendar_hands_month_view_to_renderer() {
        let html = render_to_string(|| {
            let render_grid = Callback::new(|props: CalendarGridProps| {
                let summary = format!(
                    "views={:?} default={:?} week={:?} selectable={} popup={} events={}",
                    props.views,
                    props.default_view,
                    props.week_starts_on,
                    props.selectable,
                    props.popup,
                    props.events.get_untracked().len()
                );
                view! { <div class="grid">{summary}</div> }.into_view()
            });
            view! {
                <FullScreenCalendar
                    on_select_date=Callback::new(|_| ())
                    render_grid=render_grid
                />
            }
        });
        assert!(html.contains(CALENDAR_CONTAINER_CLASS));
        assert!(html.contains(
            "views=[Month] default=Month week=Sun selectable=true popup=true events=0"
        ));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn renderer_style_callbacks_use_weekend_rule() {
        let html = render_to_string(|| {
            let render_grid = Callback::new(|props: CalendarGridProps| {
                let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
                let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
                let classes = format!(
                    "sat=[{}] mon=[{}] event=[{}]",
                    props.day_prop_getter.call(saturday).class_name(),
                    props.day_prop_getter.call(monday).class_name(),
                    props
                        .event_prop_getter
                        .call(ClassifiedEvent::single_day("Standup", monday))
                        .class_name()
                );
                view! { <p>{classes}</p> }.into_view()
            });
            view! {
                <FullScreenCalendar
                    on_select_date=Callback::new(|_| ())
                    render_grid=render_grid
                />
            }
        });
        assert!(html.contains("sat=[pointer-events-none]"));
        assert!(html.contains("mon=[]"));
        assert!(html.contains("event=[bg-blue-500 !mt-2]"));
    }
}
