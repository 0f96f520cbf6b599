/// Blog post model
///
/// Posts are authored out-of-band; the site only reads rows with
/// `published = true`. Related posts are those sharing at least one tag.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE blog_posts (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title TEXT NOT NULL,
///     slug TEXT NOT NULL UNIQUE,
///     content TEXT NOT NULL,
///     excerpt TEXT NOT NULL DEFAULT '',
///     author TEXT NOT NULL,
///     featured_image TEXT,
///     tags TEXT[] NOT NULL DEFAULT '{}',
///     meta_title TEXT,
///     meta_description TEXT,
///     published BOOLEAN NOT NULL DEFAULT FALSE,
///     published_at TIMESTAMPTZ,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Maximum number of related posts shown under an article
pub const RELATED_POST_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,

    /// Rendered HTML body
    pub content: String,

    pub excerpt: String,
    pub author: String,
    pub featured_image: Option<String>,
    pub tags: Vec<String>,

    /// SEO title; falls back to `title` when absent
    pub meta_title: Option<String>,

    /// SEO description; falls back to `excerpt` when absent
    pub meta_description: Option<String>,

    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Page title for the article view
    pub fn page_title(&self) -> String {
        self.meta_title
            .clone()
            .unwrap_or_else(|| format!("{} | ShiftORL Thrive", self.title))
    }

    /// Meta description for the article view
    pub fn page_description(&self) -> &str {
        self.meta_description.as_deref().unwrap_or(&self.excerpt)
    }

    /// True if the two posts have at least one tag in common
    pub fn shares_tag_with(&self, other: &BlogPost) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }
}

/// Listing filter for the blog index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFilter {
    /// Case-insensitive substring of the title or excerpt
    pub search: Option<String>,

    /// Exact tag the post must carry
    pub tag: Option<String>,
}

impl BlogFilter {
    /// Applies the filter to a post already known to be published
    pub fn matches(&self, post: &BlogPost) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                post.title.to_lowercase().contains(&term)
                    || post.excerpt.to_lowercase().contains(&term)
            }
            _ => true,
        };

        let matches_tag = match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => post.tags.iter().any(|t| t == tag),
            _ => true,
        };

        matches_search && matches_tag
    }

    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    fn tag_term(&self) -> Option<&str> {
        self.tag.as_deref().filter(|s| !s.is_empty())
    }
}

/// Every tag in use across `posts`, in first-seen order
pub fn collect_tags(posts: &[BlogPost]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in posts.iter().flat_map(|post| post.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

const POST_COLUMNS: &str = "id, title, slug, content, excerpt, author, featured_image, tags, \
     meta_title, meta_description, published, published_at, created_at";

impl BlogPost {
    /// Published posts matching `filter`, newest first
    pub async fn list_published(
        pool: &PgPool,
        filter: &BlogFilter,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM blog_posts
            WHERE published
              AND ($1::text IS NULL
                   OR strpos(lower(title), lower($1)) > 0
                   OR strpos(lower(excerpt), lower($1)) > 0)
              AND ($2::text IS NULL OR $2 = ANY(tags))
            ORDER BY published_at DESC NULLS LAST
            "#
        );

        let posts = sqlx::query_as::<_, BlogPost>(&query)
            .bind(filter.search_term())
            .bind(filter.tag_term())
            .fetch_all(pool)
            .await?;

        Ok(posts)
    }

    /// Finds a published post by slug
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM blog_posts
            WHERE slug = $1 AND published
            "#
        );

        let post = sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;

        Ok(post)
    }

    /// Published posts sharing a tag with `post`, excluding `post` itself
    pub async fn list_related(
        pool: &PgPool,
        post: &BlogPost,
        limit: usize,
    ) -> Result<Vec<Self>, sqlx::Error> {
        if post.tags.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM blog_posts
            WHERE published
              AND id <> $1
              AND tags && $2
            ORDER BY published_at DESC NULLS LAST
            LIMIT $3
            "#
        );

        let posts = sqlx::query_as::<_, BlogPost>(&query)
            .bind(post.id)
            .bind(&post.tags)
            .bind(limit as i64)
            .fetch_all(pool)
            .await?;

        Ok(posts)
    }
}
