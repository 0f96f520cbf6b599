/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use shiftorl_api::{app::AppState, config::Config};
/// use shiftorl_shared::email::ResendMailer;
/// use shiftorl_shared::store::PgStore;
/// use sqlx::PgPool;
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let mailer = ResendMailer::new(
///     config.email.resend_api_key.clone(),
///     config.email.resend_api_url.clone(),
/// );
/// let state = AppState::new(Arc::new(PgStore::new(pool)), Arc::new(mailer), config);
/// let app = shiftorl_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError, middleware::security::SecurityHeadersLayer};
use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request, State},
    http::{header, HeaderName, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{get, post, MethodRouter},
    Router,
};
use shiftorl_shared::{
    email::{MailRoutes, Mailer},
    store::SiteStore,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Persistence for inquiries, subscriptions and blog posts
    pub store: Arc<dyn SiteStore>,

    /// Outbound notification email
    pub mailer: Arc<dyn Mailer>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: Arc<dyn SiteStore>, mailer: Arc<dyn Mailer>, config: Config) -> Self {
        Self {
            store,
            mailer,
            config: Arc::new(config),
        }
    }

    /// Sender and inbox addresses for notification mail
    pub fn mail_routes(&self) -> MailRoutes {
        self.config.email.routes()
    }
}

/// Paths that accept form submissions
pub const SUBMISSION_PATHS: [&str; 4] = [
    "/process-contact-form",
    "/submit-application",
    "/submit-hire-inquiry",
    "/subscribe",
];

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /health                  # Health check (public)
/// ├── POST /process-contact-form    # Contact inquiry      (bearer key if configured)
/// ├── POST /submit-application      # Job application      (bearer key if configured)
/// ├── POST /submit-hire-inquiry     # Employer inquiry     (bearer key if configured)
/// ├── POST /subscribe               # Newsletter sign-up   (bearer key if configured)
/// ├── GET  /blog/posts              # Blog index (public)
/// ├── GET  /blog/posts/:slug        # Blog article (public)
/// └── GET  /jobs                    # Job listings (public)
/// ```
///
/// Submission paths answer `OPTIONS` with `ok` and any other method
/// with 405.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Compression (tower-http CompressionLayer)
/// 2. Security headers
/// 3. CORS (tower-http CorsLayer, any origin)
/// 4. `ok` body on submission preflights
/// 5. Logging (tower-http TraceLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let [contact_path, application_path, hire_path, subscribe_path] = SUBMISSION_PATHS;

    // Health check (public, no auth)
    let health_routes = Router::new()
        .route("/health", get(routes::health::health_check));

    // Form submissions (bearer key when configured)
    let submission_routes = Router::new()
        .route(
            contact_path,
            submission(post(routes::contact::process_contact_form)),
        )
        .route(
            application_path,
            submission(post(routes::application::submit_application)).layer(
                DefaultBodyLimit::max(state.config.api.max_upload_body_bytes),
            ),
        )
        .route(hire_path, submission(post(routes::hire::submit_hire_inquiry)))
        .route(
            subscribe_path,
            submission(post(routes::subscriptions::subscribe)),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            anon_key_layer,
        ));

    // Site content (public)
    let content_routes = Router::new()
        .route("/blog/posts", get(routes::blog::list_posts))
        .route("/blog/posts/:slug", get(routes::blog::get_post))
        .route("/jobs", get(routes::jobs::list_jobs));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .merge(submission_routes)
        .merge(content_routes)
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .layer(cors)
        .layer(axum::middleware::from_fn(preflight_ok))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Adds the 405 fallback to a POST route
fn submission(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(method_not_allowed)
}

/// Gives the CORS layer's `OPTIONS` answer on submission paths an `ok` body
///
/// The CORS layer answers every `OPTIONS` itself, so this sits outside it
/// and keeps its headers.
async fn preflight_ok(req: Request, next: Next) -> Response {
    let is_submission_preflight =
        req.method() == Method::OPTIONS && SUBMISSION_PATHS.contains(&req.uri().path());

    let response = next.run(req).await;
    if !is_submission_preflight || !response.status().is_success() {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    Response::from_parts(parts, Body::from("ok"))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

/// Static bearer credential check
///
/// When `SITE_ANON_KEY` is configured, requests must carry
/// `Authorization: Bearer <key>`. `OPTIONS` requests pass through.
async fn anon_key_layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.config.api.anon_key.as_deref() else {
        return Ok(next.run(req).await);
    };

    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

    // Parse Bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Expected Bearer token".to_string()))?;

    if token != expected {
        warn!(path = %req.uri().path(), "Rejected request with invalid site key");
        return Err(ApiError::Unauthorized(
            "Invalid authorization token".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
