/// Job listings endpoint
///
/// ```text
/// GET /jobs?category=Medical%20Roles
/// ```
///
/// `category` absent or `all` lists everything. An unknown category lists
/// nothing.

use axum::{extract::Query, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shiftorl_shared::jobs::{self, JobCategory, JobPosting};

#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub success: bool,
    pub jobs: Vec<JobPosting>,
    pub categories: Vec<JobCategory>,
}

pub async fn list_jobs(Query(query): Query<JobsQuery>) -> Json<JobsResponse> {
    let now = Utc::now();

    let postings = match query.category.as_deref() {
        None | Some("") | Some("all") => jobs::postings(None, now),
        Some(label) => match JobCategory::from_label(label) {
            Some(category) => jobs::postings(Some(category), now),
            None => Vec::new(),
        },
    };

    Json(JobsResponse {
        success: true,
        jobs: postings,
        categories: jobs::categories(),
    })
}
