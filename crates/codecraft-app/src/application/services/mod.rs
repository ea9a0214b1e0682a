mod calendar_refresh;

pub use calendar_refresh::{build_calendar, CalendarRefreshService, DEFAULT_VIEWPORT_WIDTH};
