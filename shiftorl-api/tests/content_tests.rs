/// Integration tests for health, blog and job listing reads

mod common;

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use common::{get_request, json_body, TestContext};
use shiftorl_shared::models::blog_post::BlogPost;
use uuid::Uuid;

fn post(slug: &str, tags: &[&str], days_ago: i64, published: bool) -> BlogPost {
    let base = Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap();
    BlogPost {
        id: Uuid::new_v4(),
        title: format!("Hiring guide {slug}"),
        slug: slug.to_string(),
        content: "<p>body</p>".to_string(),
        excerpt: format!("Notes on {slug}"),
        author: "ShiftORL".to_string(),
        featured_image: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        meta_title: None,
        meta_description: None,
        published,
        published_at: Some(base - Duration::days(days_ago)),
        created_at: base,
    }
}

fn posts() -> Vec<BlogPost> {
    vec![
        post("remote-teams", &["Remote", "Hiring"], 3, true),
        post("nurse-shortage", &["Healthcare"], 1, true),
        post("interview-tips", &["Hiring"], 2, true),
        post("draft", &["Hiring", "Drafts"], 0, false),
    ]
}

fn slugs(body: &serde_json::Value, key: &str) -> Vec<String> {
    body[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let ctx = TestContext::new();

    let response = ctx.send(get_request("/health")).await;
    let body = json_body(response, StatusCode::OK).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");

    ctx.store.set_unavailable(true);
    let response = ctx.send(get_request("/health")).await;
    let body = json_body(response, StatusCode::OK).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_blog_index_lists_published_newest_first() {
    let ctx = TestContext::with_posts(posts());

    let response = ctx.send(get_request("/blog/posts")).await;
    let body = json_body(response, StatusCode::OK).await;

    assert_eq!(body["success"], true);
    assert_eq!(
        slugs(&body, "posts"),
        vec!["nurse-shortage", "interview-tips", "remote-teams"]
    );

    let tags: Vec<&str> = body["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert!(!tags.contains(&"Drafts"));
    assert_eq!(tags.len(), 3);
}

#[tokio::test]
async fn test_blog_index_filters_but_keeps_all_tags() {
    let ctx = TestContext::with_posts(posts());

    let response = ctx.send(get_request("/blog/posts?tag=Hiring")).await;
    let body = json_body(response, StatusCode::OK).await;
    assert_eq!(
        slugs(&body, "posts"),
        vec!["interview-tips", "remote-teams"]
    );
    assert_eq!(body["tags"].as_array().unwrap().len(), 3);

    let response = ctx.send(get_request("/blog/posts?search=NURSE")).await;
    let body = json_body(response, StatusCode::OK).await;
    assert_eq!(slugs(&body, "posts"), vec!["nurse-shortage"]);
}

#[tokio::test]
async fn test_blog_post_with_related() {
    let ctx = TestContext::with_posts(posts());

    let response = ctx.send(get_request("/blog/posts/remote-teams")).await;
    let body = json_body(response, StatusCode::OK).await;

    assert_eq!(body["post"]["slug"], "remote-teams");
    assert_eq!(
        body["pageTitle"],
        "Hiring guide remote-teams | ShiftORL Thrive"
    );
    assert_eq!(body["pageDescription"], "Notes on remote-teams");
    assert_eq!(slugs(&body, "related"), vec!["interview-tips"]);
}

#[tokio::test]
async fn test_unknown_or_unpublished_post_is_not_found() {
    let ctx = TestContext::with_posts(posts());

    for path in ["/blog/posts/missing", "/blog/posts/draft"] {
        let response = ctx.send(get_request(path)).await;
        let body = json_body(response, StatusCode::NOT_FOUND).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Post not found");
    }
}

#[tokio::test]
async fn test_jobs_listing_and_category_filter() {
    let ctx = TestContext::new();

    let response = ctx.send(get_request("/jobs")).await;
    let body = json_body(response, StatusCode::OK).await;
    assert_eq!(body["jobs"].as_array().unwrap().len(), 8);
    assert_eq!(body["categories"].as_array().unwrap().len(), 4);
    assert!(body["jobs"][0]["postedAgo"].is_string());

    let response = ctx
        .send(get_request("/jobs?category=Medical%20Roles"))
        .await;
    let body = json_body(response, StatusCode::OK).await;
    let jobs = body["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|j| j["category"] == "Medical Roles"));

    let response = ctx.send(get_request("/jobs?category=all")).await;
    let body = json_body(response, StatusCode::OK).await;
    assert_eq!(body["jobs"].as_array().unwrap().len(), 8);

    let response = ctx
        .send(get_request("/jobs?category=Astronaut%20Roles"))
        .await;
    let body = json_body(response, StatusCode::OK).await;
    assert!(body["jobs"].as_array().unwrap().is_empty());
}
