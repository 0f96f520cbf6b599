/// In-memory `SiteStore`
///
/// Mirrors the Postgres rules the handlers depend on: unique subscription
/// emails, published-only blog reads ordered newest first, and related
/// posts by shared tag. `set_unavailable(true)` makes every call fail as
/// if the database were down.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{SiteStore, StoreError, StoreResult};
use crate::models::blog_post::{BlogFilter, BlogPost};
use crate::models::contact_inquiry::{ContactInquiry, CreateContactInquiry};
use crate::models::subscription::EmailSubscription;

#[derive(Default)]
pub struct MemoryStore {
    inquiries: RwLock<Vec<ContactInquiry>>,
    subscriptions: RwLock<Vec<EmailSubscription>>,
    posts: RwLock<Vec<BlogPost>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with blog posts, published or not
    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: RwLock::new(posts),
            ..Self::default()
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn inquiries(&self) -> Vec<ContactInquiry> {
        self.inquiries.read().await.clone()
    }

    pub async fn subscriptions(&self) -> Vec<EmailSubscription> {
        self.subscriptions.read().await.clone()
    }

    fn ensure_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    /// Published posts, newest first; undated posts last
    async fn published(&self) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = self
            .posts
            .read()
            .await
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }
}

#[async_trait]
impl SiteStore for MemoryStore {
    async fn insert_contact_inquiry(
        &self,
        data: CreateContactInquiry,
    ) -> StoreResult<ContactInquiry> {
        self.ensure_available()?;

        let inquiry = ContactInquiry {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            message: data.message,
            created_at: Utc::now(),
        };
        self.inquiries.write().await.push(inquiry.clone());
        Ok(inquiry)
    }

    async fn insert_subscription(&self, email: &str) -> StoreResult<EmailSubscription> {
        self.ensure_available()?;

        let mut subscriptions = self.subscriptions.write().await;
        if subscriptions.iter().any(|s| s.email == email) {
            return Err(StoreError::Duplicate);
        }

        let subscription = EmailSubscription {
            id: Uuid::new_v4(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        subscriptions.push(subscription.clone());
        Ok(subscription)
    }

    async fn published_posts(&self, filter: &BlogFilter) -> StoreResult<Vec<BlogPost>> {
        self.ensure_available()?;
        Ok(self
            .published()
            .await
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect())
    }

    async fn published_post_by_slug(&self, slug: &str) -> StoreResult<Option<BlogPost>> {
        self.ensure_available()?;
        Ok(self.published().await.into_iter().find(|p| p.slug == slug))
    }

    async fn related_posts(&self, post: &BlogPost, limit: usize) -> StoreResult<Vec<BlogPost>> {
        self.ensure_available()?;
        Ok(self
            .published()
            .await
            .into_iter()
            .filter(|p| p.id != post.id && p.shares_tag_with(post))
            .take(limit)
            .collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.ensure_available()
    }
}
