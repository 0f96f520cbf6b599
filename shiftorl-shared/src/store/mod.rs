/// Persistence boundary for the site
///
/// Handlers talk to a `SiteStore` rather than a connection pool, so the
/// same routes run against Postgres in production and an in-memory store
/// in tests.
///
/// # Backends
///
/// - **Postgres** (`PgStore`): the `models` queries over a sqlx pool
/// - **Memory** (`MemoryStore`): `RwLock`-guarded vectors with the same
///   uniqueness and filtering rules
///
/// # Example
///
/// ```no_run
/// use shiftorl_shared::store::{SiteStore, StoreError, PgStore};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), StoreError> {
/// let store = PgStore::new(pool);
/// match store.insert_subscription("jane@example.com").await {
///     Ok(_) => println!("subscribed"),
///     Err(StoreError::Duplicate) => println!("already subscribed"),
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;

use crate::models::blog_post::{BlogFilter, BlogPost};
use crate::models::contact_inquiry::{ContactInquiry, CreateContactInquiry};
use crate::models::subscription::EmailSubscription;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("Record already exists")]
    Duplicate,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if crate::models::subscription::is_unique_violation(&err) {
            StoreError::Duplicate
        } else {
            match err {
                sqlx::Error::RowNotFound => StoreError::NotFound,
                other => StoreError::Database(other),
            }
        }
    }
}

/// Reads and writes the handlers need
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Stores a contact inquiry and returns the row as written
    async fn insert_contact_inquiry(
        &self,
        data: CreateContactInquiry,
    ) -> StoreResult<ContactInquiry>;

    /// Adds a newsletter subscription
    ///
    /// # Errors
    ///
    /// `StoreError::Duplicate` if the address is already subscribed
    async fn insert_subscription(&self, email: &str) -> StoreResult<EmailSubscription>;

    /// Published posts matching `filter`, newest first
    async fn published_posts(&self, filter: &BlogFilter) -> StoreResult<Vec<BlogPost>>;

    async fn published_post_by_slug(&self, slug: &str) -> StoreResult<Option<BlogPost>>;

    /// Up to `limit` published posts sharing a tag with `post`
    async fn related_posts(&self, post: &BlogPost, limit: usize) -> StoreResult<Vec<BlogPost>>;

    /// Cheap liveness check for `/health`
    async fn ping(&self) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::NotFound
        ));
    }

    #[test]
    fn test_other_sqlx_errors_are_database_errors() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Database(_)
        ));
    }
}
