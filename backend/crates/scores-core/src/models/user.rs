use crate::UserFields;

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamps are stored with microsecond precision, so every timestamp the
/// store hands out is truncated to match what a later read returns.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    pub name: String,
    pub high_score: u32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a fresh active record with a newly generated id.
    pub fn new(fields: &UserFields) -> Self {
        let now = current_timestamp();
        Self {
            id: Uuid::new_v4().to_string(),
            name: fields.name.clone(),
            high_score: fields.high_score,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Full-replace of the mutable fields. `id` and `created_at` carry over;
    /// `updated_at` always moves forward, even when the clock has not.
    pub fn replaced_with(&self, fields: &UserFields) -> Self {
        let now = current_timestamp();
        let floor = self.updated_at + TimeDelta::microseconds(1);
        Self {
            id: self.id.clone(),
            name: fields.name.clone(),
            high_score: fields.high_score,
            created_at: self.created_at,
            updated_at: now.max(floor),
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
