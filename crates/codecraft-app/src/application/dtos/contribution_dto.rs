use serde::{Deserialize, Serialize};

use codecraft_domain::activity::DailyCount;
use codecraft_domain::calendar::CalendarLayout;

/// Aggregator output: one entry per day with at least one activity,
/// unordered, dates unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCountDto {
    pub date: String, // YYYY-MM-DD
    pub count: u32,
}

impl DailyCountDto {
    pub fn from_domain(count: &DailyCount) -> Self {
        Self {
            date: count.date().format("%Y-%m-%d").to_string(),
            count: count.count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCellDto {
    pub date: String, // YYYY-MM-DD
    pub count: u32,
    pub tier: u8, // 0..=4
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekColumnDto {
    pub days: Vec<DayCellDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabelDto {
    pub week_index: usize,
    pub show: bool,
    pub label: String,
}

/// The renderable grid, plus the summary the profile header shows
/// ("N active days in the last year").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCalendarDto {
    pub weeks: Vec<WeekColumnDto>,
    pub month_labels: Vec<MonthLabelDto>,
    pub color_family: String,
    pub max_days: u32,
    pub active_days: u32,
    pub total_activities: u64,
}

impl ContributionCalendarDto {
    /// `counts` is the full-year aggregation the layout was built from;
    /// the summary stats cover it even when the grid window is shorter.
    pub fn from_layout(layout: &CalendarLayout, counts: &[DailyCount]) -> Self {
        let weeks = layout
            .weeks()
            .iter()
            .map(|week| WeekColumnDto {
                days: week
                    .cells()
                    .iter()
                    .map(|cell| DayCellDto {
                        date: cell.date().format("%Y-%m-%d").to_string(),
                        count: cell.count(),
                        tier: cell.tier().level(),
                    })
                    .collect(),
            })
            .collect();

        let month_labels = layout
            .month_labels()
            .iter()
            .map(|label| MonthLabelDto {
                week_index: label.week_index,
                show: label.show,
                label: label.label.clone(),
            })
            .collect();

        Self {
            weeks,
            month_labels,
            color_family: layout.color_family().as_str().to_string(),
            max_days: layout.max_days(),
            active_days: counts.len() as u32,
            total_activities: counts.iter().map(|c| u64::from(c.count())).sum(),
        }
    }
}
