//! User repository: CRUD over the `users` table with soft delete.
//!
//! Every read filters `deleted_at IS NULL` explicitly. A deleted row stays in
//! the table and its id is never handed out again.

use crate::{DbError, Result as DbErrorResult};

use scores_core::{User, UserFields, current_timestamp};

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const USER_ENTITY: &str = "User";

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    name: String,
    high_score: i64,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        let high_score = u32::try_from(r.high_score).map_err(|_| {
            DbError::invalid_data(format!(
                "users.high_score out of range for {}: {}",
                r.id, r.high_score
            ))
        })?;

        Ok(User {
            created_at: from_micros(r.created_at, "created_at")?,
            updated_at: from_micros(r.updated_at, "updated_at")?,
            deleted_at: r
                .deleted_at
                .map(|ts| from_micros(ts, "deleted_at"))
                .transpose()?,
            id: r.id,
            name: r.name,
            high_score,
        })
    }
}

fn from_micros(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(value)
        .ok_or_else(|| DbError::invalid_data(format!("Invalid timestamp in users.{}", column)))
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. Any id the caller had in mind is irrelevant: the
    /// record gets a fresh UUID and server-side timestamps.
    pub async fn create(&self, fields: &UserFields) -> DbErrorResult<User> {
        let user = User::new(fields);

        sqlx::query(
            r#"
                INSERT INTO users (id, name, high_score, created_at, updated_at, deleted_at)
                VALUES (?, ?, ?, ?, ?, NULL)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(i64::from(user.high_score))
        .bind(user.created_at.timestamp_micros())
        .bind(user.updated_at.timestamp_micros())
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, high_score, created_at, updated_at, deleted_at
                FROM users
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| DbError::not_found(USER_ENTITY, id))?
            .try_into()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, high_score, created_at, updated_at, deleted_at
                FROM users
                WHERE deleted_at IS NULL
                ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    /// Replace `name` and `high_score` of an active user.
    ///
    /// The read and the write are separate statements; concurrent writers to
    /// the same id are ordered by SQLite, and a delete that lands in between
    /// surfaces as `NotFound`.
    pub async fn update(&self, id: &str, fields: &UserFields) -> DbErrorResult<User> {
        let existing = self.find_by_id(id).await?;
        let user = existing.replaced_with(fields);

        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = ?, high_score = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&user.name)
        .bind(i64::from(user.high_score))
        .bind(user.updated_at.timestamp_micros())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(USER_ENTITY, id));
        }

        Ok(user)
    }

    /// Soft delete. Succeeds whether or not an active row matched.
    pub async fn delete(&self, id: &str) -> DbErrorResult<()> {
        let deleted_at = current_timestamp().timestamp_micros();

        sqlx::query(
            r#"
                UPDATE users
                SET deleted_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(deleted_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count_active(&self) -> DbErrorResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
