use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::{info, warn};

use codecraft_domain::activity::{ActivityRepository, DailyCount};
use codecraft_domain::session::IdentityProvider;
use codecraft_domain::shared::DomainError;

/// Trailing aggregation window, independent of the display window
/// (every display window is a subset of it).
const WINDOW_DAYS: i64 = 365;

/// Fan out over the four logs, fan in, and fold records into per-day
/// counts by UTC calendar day. Two actions by the same user on the same
/// day count twice (sum, not union). A failed source aborts the whole
/// aggregation; merging partial sources would silently undercount.
pub(super) async fn daily_counts(
    identity: &dyn IdentityProvider,
    activities: &dyn ActivityRepository,
    now: DateTime<Utc>,
) -> Result<Vec<DailyCount>, DomainError> {
    let user_id = match identity.current_user().await {
        Ok(Some(user_id)) => user_id,
        Ok(None) => {
            info!("[contrib] unauthenticated request, returning empty calendar");
            return Ok(Vec::new());
        }
        Err(e) => {
            warn!("[contrib] identity resolution failed, returning empty calendar: {}", e);
            return Ok(Vec::new());
        }
    };

    let since = now - Duration::days(WINDOW_DAYS);

    let (executions, snippets, comments, stars) = tokio::try_join!(
        activities.list_executions_since(&user_id, since),
        activities.list_snippets_since(&user_id, since),
        activities.list_comments_since(&user_id, since),
        activities.list_stars_since(&user_id, since),
    )?;

    let total = executions.len() + snippets.len() + comments.len() + stars.len();

    let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
    for record in executions
        .iter()
        .chain(&snippets)
        .chain(&comments)
        .chain(&stars)
    {
        *per_day.entry(record.day()).or_insert(0) += 1;
    }

    info!(
        "[contrib] aggregated user_id={} window={}~{} records={} active_days={}",
        user_id,
        since.format("%Y-%m-%d"),
        now.format("%Y-%m-%d"),
        total,
        per_day.len()
    );

    per_day
        .into_iter()
        .map(|(date, count)| DailyCount::new(date, count))
        .collect()
}
