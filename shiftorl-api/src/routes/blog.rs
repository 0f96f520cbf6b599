/// Blog read endpoints
///
/// # Endpoints
///
/// - `GET /blog/posts?search=&tag=` - Published posts, newest first, plus
///   the tags in use
/// - `GET /blog/posts/:slug` - One published post and up to three related
///   posts

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shiftorl_shared::models::blog_post::{collect_tags, BlogFilter, BlogPost, RELATED_POST_LIMIT};

const LOAD_FAILED_MESSAGE: &str = "Failed to load blog posts. Please try again.";

/// Query parameters for the blog index
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
}

/// Blog index response
#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub success: bool,
    pub posts: Vec<BlogPost>,

    /// Every tag on a published post, in first-seen order
    pub tags: Vec<String>,
}

/// Blog article response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub success: bool,
    pub post: BlogPost,
    pub page_title: String,
    pub page_description: String,
    pub related: Vec<BlogPost>,
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> ApiResult<Json<BlogListResponse>> {
    let filter = BlogFilter {
        search: query.search,
        tag: query.tag,
    };

    let posts = state
        .store
        .published_posts(&filter)
        .await
        .map_err(|e| ApiError::internal(LOAD_FAILED_MESSAGE, e))?;

    // The tag cloud always covers every published post, not just the filtered ones
    let tags = if filter == BlogFilter::default() {
        collect_tags(&posts)
    } else {
        let all = state
            .store
            .published_posts(&BlogFilter::default())
            .await
            .map_err(|e| ApiError::internal(LOAD_FAILED_MESSAGE, e))?;
        collect_tags(&all)
    };

    Ok(Json(BlogListResponse {
        success: true,
        posts,
        tags,
    }))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<BlogPostResponse>> {
    let post = state
        .store
        .published_post_by_slug(&slug)
        .await
        .map_err(|e| ApiError::internal(LOAD_FAILED_MESSAGE, e))?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    let related = state
        .store
        .related_posts(&post, RELATED_POST_LIMIT)
        .await
        .map_err(|e| ApiError::internal(LOAD_FAILED_MESSAGE, e))?;

    Ok(Json(BlogPostResponse {
        success: true,
        page_title: post.page_title(),
        page_description: post.page_description().to_string(),
        post,
        related,
    }))
}
