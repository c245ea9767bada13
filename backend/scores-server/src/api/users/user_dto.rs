use scores_core::User;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User as it appears on the wire. The deletion mark never leaves the store.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub high_score: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            high_score: user.high_score,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
