mod layout;
mod value_objects;

#[cfg(test)]
mod value_objects_test;

pub use layout::{max_days_for_width, CalendarLayout};
pub use value_objects::{ColorFamily, DayCell, IntensityTier, MonthLabel, WeekColumn};
