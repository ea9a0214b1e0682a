use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sqlx::{FromRow, SqlitePool};

use crate::persistence::ResultExt;
use codecraft_domain::activity::{ActivityRecord, ActivityRepository, ActivitySource};
use codecraft_domain::shared::{DomainError, UserId};

#[derive(FromRow)]
struct ActivityRow {
    user_id: String,
    created_at: DateTime<Utc>,
}

impl ActivityRow {
    fn into_record(self) -> ActivityRecord {
        ActivityRecord::restore(UserId::from_string(&self.user_id), self.created_at)
    }
}

/// SQLite-backed view over the four activity logs. Every accessor is a
/// single window-filtered read; the logs are never written from here.
pub struct SqliteActivityRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteActivityRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    fn table_for(source: ActivitySource) -> &'static str {
        match source {
            ActivitySource::Execution => "code_executions",
            ActivitySource::SnippetCreated => "snippets",
            ActivitySource::Comment => "snippet_comments",
            ActivitySource::Star => "stars",
        }
    }

    async fn list_since(
        &self,
        source: ActivitySource,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, DomainError> {
        // Table names come from the fixed mapping above, never from input.
        let query = format!(
            r#"
            SELECT
                user_id,
                created_at
            FROM {}
            WHERE user_id = ?1
              AND created_at >= ?2
            ORDER BY created_at ASC
            "#,
            Self::table_for(source)
        );

        let rows: Vec<ActivityRow> = sqlx::query_as(&query)
            .bind(user_id.as_str())
            .bind(since)
            .fetch_all(&*self.pool)
            .await
            .to_repo_err()?;

        debug!(
            "[activity] source={} user_id={} since={} rows={}",
            source.as_str(),
            user_id,
            since.format("%Y-%m-%d"),
            rows.len()
        );

        Ok(rows.into_iter().map(ActivityRow::into_record).collect())
    }
}

#[async_trait]
impl ActivityRepository for SqliteActivityRepository {
    async fn list_executions_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, DomainError> {
        self.list_since(ActivitySource::Execution, user_id, since)
            .await
    }

    async fn list_snippets_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, DomainError> {
        self.list_since(ActivitySource::SnippetCreated, user_id, since)
            .await
    }

    async fn list_comments_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, DomainError> {
        self.list_since(ActivitySource::Comment, user_id, since)
            .await
    }

    async fn list_stars_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>, DomainError> {
        self.list_since(ActivitySource::Star, user_id, since).await
    }
}
