pub mod panel;
pub mod repository;
pub mod style;
pub mod types;
pub mod utils;
pub mod view_model;

pub use panel::{CalendarGridProps, FullScreenCalendar};
