/// Email subscription model
///
/// Insert-only. The `email` column is UNIQUE, so a repeat sign-up surfaces
/// as a Postgres unique violation (SQLSTATE `23505`), which the store
/// layer reports as `StoreError::Duplicate`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// SQLSTATE raised by Postgres for a unique constraint violation
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmailSubscription {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl EmailSubscription {
    /// Inserts a subscription for `email`
    ///
    /// # Errors
    ///
    /// Fails with a database error carrying code `23505` if the address is
    /// already subscribed.
    pub async fn create(pool: &PgPool, email: &str) -> Result<Self, sqlx::Error> {
        let subscription = sqlx::query_as::<_, EmailSubscription>(
            r#"
            INSERT INTO email_subscriptions (email)
            VALUES ($1)
            RETURNING id, email, created_at
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(subscription)
    }
}

/// Returns true if the error is a unique constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }
}
