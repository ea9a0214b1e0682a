use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::value_objects::{ColorFamily, DayCell, MonthLabel, WeekColumn};
use crate::shared::DomainError;

/// Map a viewport width (logical pixels) to the number of trailing days
/// to display. Breakpoints are lower-inclusive: a width of exactly 640
/// already selects the 180-day window.
pub fn max_days_for_width(width: f64) -> Result<u32, DomainError> {
    if !width.is_finite() || width <= 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "Viewport width must be a positive finite number, got {}",
            width
        )));
    }

    let max_days = if width < 640.0 {
        90 // ~3 months
    } else if width < 1024.0 {
        180 // ~6 months
    } else if width < 1280.0 {
        270 // ~9 months
    } else {
        365 // full year
    };

    Ok(max_days)
}

/// The week-aligned contribution grid for one viewport window.
///
/// A pure value: rebuilding with the same counts, end date, width and
/// plan always yields an identical layout. There is no incremental
/// update; callers recompute on every viewport change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarLayout {
    weeks: Vec<WeekColumn>,
    month_labels: Vec<MonthLabel>,
    color_family: ColorFamily,
    max_days: u32,
}

impl CalendarLayout {
    /// Build the grid for the `max_days_for_width(viewport_width)` days
    /// ending at `end_date` inclusive.
    ///
    /// Dates absent from `counts` become zero-count cells, so an empty
    /// map is valid and produces an all-zero grid.
    pub fn build(
        counts: &HashMap<NaiveDate, u32>,
        end_date: NaiveDate,
        viewport_width: f64,
        is_pro: bool,
    ) -> Result<CalendarLayout, DomainError> {
        let max_days = max_days_for_width(viewport_width)?;

        let days = day_range(counts, end_date, max_days);
        let weeks = partition_weeks(days)?;
        let month_labels = month_labels(&weeks);

        Ok(CalendarLayout {
            weeks,
            month_labels,
            color_family: ColorFamily::for_plan(is_pro),
            max_days,
        })
    }

    pub fn weeks(&self) -> &[WeekColumn] {
        &self.weeks
    }

    pub fn month_labels(&self) -> &[MonthLabel] {
        &self.month_labels
    }

    pub fn color_family(&self) -> ColorFamily {
        self.color_family
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }
}

/// Contiguous, gap-free sequence of `max_days` day cells ending at
/// `end_date`, with counts looked up per date (absent → 0).
fn day_range(counts: &HashMap<NaiveDate, u32>, end_date: NaiveDate, max_days: u32) -> Vec<DayCell> {
    let start_date = end_date - Duration::days(i64::from(max_days) - 1);

    start_date
        .iter_days()
        .take(max_days as usize)
        .map(|date| DayCell::new(date, counts.get(&date).copied().unwrap_or(0)))
        .collect()
}

/// Walk the day sequence in order, closing a column after every
/// Saturday. A trailing non-empty column is closed as a final partial
/// column.
fn partition_weeks(days: Vec<DayCell>) -> Result<Vec<WeekColumn>, DomainError> {
    let mut weeks = Vec::new();
    let mut current = Vec::new();

    for cell in days {
        let closes_column = cell.date().weekday() == Weekday::Sat;
        current.push(cell);

        if closes_column {
            weeks.push(WeekColumn::new(std::mem::take(&mut current))?);
        }
    }

    if !current.is_empty() {
        weeks.push(WeekColumn::new(current)?);
    }

    Ok(weeks)
}

/// One label decision per week column: show iff the column's first date
/// falls in the first seven days of its month and the month changed
/// since the previous column (or it is the first column).
fn month_labels(weeks: &[WeekColumn]) -> Vec<MonthLabel> {
    let mut labels = Vec::with_capacity(weeks.len());

    for (week_index, week) in weeks.iter().enumerate() {
        let first = week.first_date();

        let month_changed = week_index == 0
            || first.month() != weeks[week_index - 1].first_date().month();
        let show = first.day() <= 7 && month_changed;

        labels.push(MonthLabel {
            week_index,
            show,
            label: first.format("%b").to_string(),
        });
    }

    labels
}
