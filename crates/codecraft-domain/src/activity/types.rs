use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

/// The four independent activity logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivitySource {
    Execution,
    SnippetCreated,
    Comment,
    Star,
}

impl ActivitySource {
    pub const ALL: [ActivitySource; 4] = [
        ActivitySource::Execution,
        ActivitySource::SnippetCreated,
        ActivitySource::Comment,
        ActivitySource::Star,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivitySource::Execution => "execution",
            ActivitySource::SnippetCreated => "snippet",
            ActivitySource::Comment => "comment",
            ActivitySource::Star => "star",
        }
    }
}

/// A single timestamped user action from one of the four logs.
///
/// The record's payload (code, comment text, ...) never reaches this
/// layer; identity and timestamp are all the calendar needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    user_id: UserId,
    occurred_at: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn new(user_id: UserId, occurred_at: DateTime<Utc>) -> Result<Self, DomainError> {
        if user_id.as_str().is_empty() {
            return Err(DomainError::Validation(
                "Activity user id cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            occurred_at,
        })
    }

    pub fn restore(user_id: UserId, occurred_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            occurred_at,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// UTC calendar-day truncation of the timestamp.
    pub fn day(&self) -> NaiveDate {
        self.occurred_at.date_naive()
    }
}

/// Aggregated activity for one calendar date.
///
/// Only emitted for days with at least one activity; days without
/// activity are zero-filled later by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    date: NaiveDate,
    count: u32,
}

impl DailyCount {
    pub fn new(date: NaiveDate, count: u32) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::Validation(
                "Daily count must be at least 1".to_string(),
            ));
        }

        Ok(Self { date, count })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
