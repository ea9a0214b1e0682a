use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use sqlx::{FromRow, SqlitePool};

use crate::persistence::ResultExt;
use codecraft_domain::session::IdentityProvider;
use codecraft_domain::shared::{DomainError, UserId};

#[derive(FromRow)]
struct SessionRow {
    user_id: String,
}

/// Resolves the current user from the most recent session row.
pub struct SqliteSessionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for SqliteSessionRepository {
    async fn current_user(&self) -> Result<Option<UserId>, DomainError> {
        let query = r#"
            SELECT user_id
            FROM sessions
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let row: Option<SessionRow> = sqlx::query_as(query)
            .fetch_optional(&*self.pool)
            .await
            .to_repo_err()?;

        match &row {
            Some(session) => debug!("[session] resolved user_id={}", session.user_id),
            None => debug!("[session] no active session"),
        }

        Ok(row.map(|r| UserId::from_string(&r.user_id)))
    }
}
