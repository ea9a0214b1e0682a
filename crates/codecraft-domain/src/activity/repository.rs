use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::ActivityRecord;
use crate::shared::{DomainError, UserId};

/// Read-only access to the four activity logs.
///
/// Each accessor returns every record for `user_id` whose timestamp is
/// at or after `since`. The accessors are independent and safe to call
/// concurrently; aggregation callers fan out over all four and must not
/// merge partial results.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Code execution log.
    async fn list_executions_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, DomainError>;

    /// Snippet creation log.
    async fn list_snippets_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, DomainError>;

    /// Snippet comment log.
    async fn list_comments_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, DomainError>;

    /// Star log.
    async fn list_stars_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, DomainError>;
}
