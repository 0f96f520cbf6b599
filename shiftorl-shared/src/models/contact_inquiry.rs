/// Contact inquiry model
///
/// The contact form is the only submission the site stores itself. The row
/// is written before the notification email goes out, so a lost email
/// never loses the inquiry.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE client_inquiries (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name TEXT NOT NULL,
///     email TEXT NOT NULL,
///     message TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A stored contact inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactInquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Input for storing a new inquiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContactInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInquiry {
    /// Inserts the inquiry and returns the stored row
    pub async fn create(pool: &PgPool, data: CreateContactInquiry) -> Result<Self, sqlx::Error> {
        let inquiry = sqlx::query_as::<_, ContactInquiry>(
            r#"
            INSERT INTO client_inquiries (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.message)
        .fetch_one(pool)
        .await?;

        Ok(inquiry)
    }

    /// Finds an inquiry by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let inquiry = sqlx::query_as::<_, ContactInquiry>(
            r#"
            SELECT id, name, email, message, created_at
            FROM client_inquiries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(inquiry)
    }
}
