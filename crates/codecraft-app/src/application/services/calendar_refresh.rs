use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use log::{info, warn};
use tokio::sync::watch;

use crate::application::dtos::ContributionCalendarDto;
use crate::application::queries::ContributionQueries;
use codecraft_domain::activity::DailyCount;
use codecraft_domain::calendar::CalendarLayout;
use codecraft_domain::shared::DomainError;

/// Window seeded into the width channel until a real viewport reports.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Pure composition step: aggregated counts in, renderable grid out.
/// Same counts, end date, width and plan always produce the same DTO.
pub fn build_calendar(
    counts: &[DailyCount],
    end_date: NaiveDate,
    viewport_width: f64,
    is_pro: bool,
) -> Result<ContributionCalendarDto, DomainError> {
    let by_date: HashMap<NaiveDate, u32> =
        counts.iter().map(|c| (c.date(), c.count())).collect();

    let layout = CalendarLayout::build(&by_date, end_date, viewport_width, is_pro)?;

    Ok(ContributionCalendarDto::from_layout(&layout, counts))
}

/// Re-runs aggregation + layout whenever the viewport width changes and
/// publishes the latest grid. The layout itself holds no state and no
/// subscription; this adapter owns the "when", the domain owns the
/// "what". A newer width simply supersedes the previous grid — nothing
/// is cancelled or diffed.
pub struct CalendarRefreshService {
    queries: Arc<ContributionQueries>,
    width_rx: watch::Receiver<f64>,
    calendar_tx: watch::Sender<Option<ContributionCalendarDto>>,
    is_pro: bool,
}

impl CalendarRefreshService {
    pub fn new(
        queries: Arc<ContributionQueries>,
        width_rx: watch::Receiver<f64>,
        is_pro: bool,
    ) -> (Self, watch::Receiver<Option<ContributionCalendarDto>>) {
        let (calendar_tx, calendar_rx) = watch::channel(None);

        (
            Self {
                queries,
                width_rx,
                calendar_tx,
                is_pro,
            },
            calendar_rx,
        )
    }

    /// Compute a grid for the seeded width, then once per width change,
    /// until the width channel closes.
    pub async fn run(mut self) {
        loop {
            let width = *self.width_rx.borrow_and_update();

            match self.refresh(width).await {
                Ok(calendar) => {
                    info!(
                        "[contrib] calendar refreshed width={} max_days={} weeks={}",
                        width,
                        calendar.max_days,
                        calendar.weeks.len()
                    );
                    let _ = self.calendar_tx.send(Some(calendar));
                }
                Err(e) => {
                    // Invalid widths and failed fetches keep the
                    // previously published grid in place.
                    warn!("[contrib] calendar refresh failed width={}: {}", width, e);
                }
            }

            if self.width_rx.changed().await.is_err() {
                info!("[contrib] viewport signal closed, stopping refresh loop");
                break;
            }
        }
    }

    async fn refresh(&self, width: f64) -> Result<ContributionCalendarDto, DomainError> {
        let now = Utc::now();
        let counts = self.queries.daily_counts(now).await?;

        build_calendar(&counts, now.date_naive(), width, self.is_pro)
    }
}
