//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - A router wired to an in-memory store and a recording mailer
//! - Request builders for JSON and multipart bodies
//! - Response helpers
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use shiftorl_api::app::{build_router, AppState};
use shiftorl_api::config::{
    ApiConfig, Config, DatabaseConfig, EmailConfig, DEFAULT_MAX_UPLOAD_BODY_BYTES,
};
use shiftorl_shared::email::RecordingMailer;
use shiftorl_shared::models::blog_post::BlogPost;
use shiftorl_shared::store::MemoryStore;
use std::sync::Arc;
use tower::ServiceExt;

pub const BOUNDARY: &str = "shiftorl-test-boundary";

/// Test context containing the app and handles to its collaborators
pub struct TestContext {
    pub app: axum::Router,
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<RecordingMailer>,
    pub config: Config,
}

impl TestContext {
    /// App with an empty store and an accepting mailer
    pub fn new() -> Self {
        Self::build(MemoryStore::new(), RecordingMailer::new(), test_config())
    }

    pub fn with_mailer(mailer: RecordingMailer) -> Self {
        Self::build(MemoryStore::new(), mailer, test_config())
    }

    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self::build(
            MemoryStore::with_posts(posts),
            RecordingMailer::new(),
            test_config(),
        )
    }

    pub fn with_config(config: Config) -> Self {
        Self::build(MemoryStore::new(), RecordingMailer::new(), config)
    }

    fn build(store: MemoryStore, mailer: RecordingMailer, config: Config) -> Self {
        let store = Arc::new(store);
        let mailer = Arc::new(mailer);
        let state = AppState::new(store.clone(), mailer.clone(), config.clone());

        TestContext {
            app: build_router(state),
            store,
            mailer,
            config,
        }
    }

    /// Sends one request through a clone of the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }
}

pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            production: false,
            max_upload_body_bytes: DEFAULT_MAX_UPLOAD_BODY_BYTES,
            anon_key: None,
        },
        database: DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
        },
        email: EmailConfig {
            resend_api_key: Some("re_test".to_string()),
            ..EmailConfig::default()
        },
    }
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// One multipart part: text field or file
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                let disposition =
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n");
                body.extend_from_slice(disposition.as_bytes());
            }
            Part::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

/// Reads the response as JSON, asserting the status first
pub async fn json_body(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    assert_eq!(
        status,
        expected,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&bytes)
    );
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn text_body(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
