use async_trait::async_trait;
use sqlx::PgPool;

use super::{SiteStore, StoreResult};
use crate::db::pool;
use crate::models::blog_post::{BlogFilter, BlogPost};
use crate::models::contact_inquiry::{ContactInquiry, CreateContactInquiry};
use crate::models::subscription::EmailSubscription;

/// `SiteStore` over a Postgres pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SiteStore for PgStore {
    async fn insert_contact_inquiry(
        &self,
        data: CreateContactInquiry,
    ) -> StoreResult<ContactInquiry> {
        Ok(ContactInquiry::create(&self.pool, data).await?)
    }

    async fn insert_subscription(&self, email: &str) -> StoreResult<EmailSubscription> {
        Ok(EmailSubscription::create(&self.pool, email).await?)
    }

    async fn published_posts(&self, filter: &BlogFilter) -> StoreResult<Vec<BlogPost>> {
        Ok(BlogPost::list_published(&self.pool, filter).await?)
    }

    async fn published_post_by_slug(&self, slug: &str) -> StoreResult<Option<BlogPost>> {
        Ok(BlogPost::find_published_by_slug(&self.pool, slug).await?)
    }

    async fn related_posts(&self, post: &BlogPost, limit: usize) -> StoreResult<Vec<BlogPost>> {
        Ok(BlogPost::list_related(&self.pool, post, limit).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(pool::health_check(&self.pool).await?)
    }
}
