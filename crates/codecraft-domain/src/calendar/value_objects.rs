use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// One date of the layout grid. Present for every day in the window,
/// zero-count days included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    date: NaiveDate,
    count: u32,
}

impl DayCell {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn tier(&self) -> IntensityTier {
        IntensityTier::for_count(self.count)
    }
}

/// A chronologically ordered group of 1 to 7 day cells.
///
/// Every full column ends on a Saturday; only the first and last
/// columns of a grid may be shorter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekColumn {
    cells: Vec<DayCell>,
}

impl WeekColumn {
    pub fn new(cells: Vec<DayCell>) -> Result<Self, DomainError> {
        if cells.is_empty() {
            return Err(DomainError::Validation(
                "Week column cannot be empty".to_string(),
            ));
        }
        if cells.len() > 7 {
            return Err(DomainError::Validation(
                "Week column cannot hold more than 7 days".to_string(),
            ));
        }

        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.len() == 7
    }

    /// First cell's date; anchors the month-label decision.
    pub fn first_date(&self) -> NaiveDate {
        self.cells[0].date()
    }
}

/// Whether a week column carries a month abbreviation, and which one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabel {
    pub week_index: usize,
    pub show: bool,
    pub label: String,
}

/// Discrete visual weight of a day cell.
///
/// Thresholds are part of the observable contract and identical for
/// both color families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntensityTier {
    Empty,
    Low,
    Moderate,
    High,
    Peak,
}

impl IntensityTier {
    /// Pure tier function: 0 → Empty, <2 → Low, <4 → Moderate,
    /// <7 → High, otherwise Peak.
    pub fn for_count(count: u32) -> Self {
        if count == 0 {
            IntensityTier::Empty
        } else if count < 2 {
            IntensityTier::Low
        } else if count < 4 {
            IntensityTier::Moderate
        } else if count < 7 {
            IntensityTier::High
        } else {
            IntensityTier::Peak
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            IntensityTier::Empty => 0,
            IntensityTier::Low => 1,
            IntensityTier::Moderate => 2,
            IntensityTier::High => 3,
            IntensityTier::Peak => 4,
        }
    }
}

/// Color family selected by the user's plan. Selecting a family never
/// changes tier thresholds or tier count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorFamily {
    Emerald,
    Purple,
}

impl ColorFamily {
    pub fn for_plan(is_pro: bool) -> Self {
        if is_pro {
            ColorFamily::Purple
        } else {
            ColorFamily::Emerald
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFamily::Emerald => "emerald",
            ColorFamily::Purple => "purple",
        }
    }
}
