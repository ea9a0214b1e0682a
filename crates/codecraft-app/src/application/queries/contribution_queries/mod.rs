use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::dtos::DailyCountDto;
use codecraft_domain::activity::{ActivityRepository, DailyCount};
use codecraft_domain::session::IdentityProvider;
use codecraft_domain::shared::DomainError;

mod aggregate;


/// The Aggregator: merges the four activity logs of the current user
/// into per-day counts over a trailing one-year window.
pub struct ContributionQueries {
    identity: Arc<dyn IdentityProvider>,
    activities: Arc<dyn ActivityRepository>,
}

impl ContributionQueries {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        activities: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            identity,
            activities,
        }
    }

    /// Per-day activity counts for the year ending at `now`.
    /// Unauthenticated callers get an empty result, not an error.
    pub async fn daily_counts(&self, now: DateTime<Utc>) -> Result<Vec<DailyCount>, DomainError> {
        aggregate::daily_counts(self.identity.as_ref(), self.activities.as_ref(), now).await
    }

    /// Wire-shaped variant of [`Self::daily_counts`].
    pub async fn get_contribution_calendar(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<DailyCountDto>, DomainError> {
        let counts = self.daily_counts(now).await?;
        Ok(counts.iter().map(DailyCountDto::from_domain).collect())
    }
}
