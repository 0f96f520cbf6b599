/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// Every failure renders the site's envelope:
///
/// ```json
/// { "success": false, "error": "<message for the visitor>" }
/// ```
///
/// Upstream email failures may add a `debug` object with the provider's
/// status and response body.
///
/// # Example
///
/// ```
/// use shiftorl_api::error::{ApiError, ApiResult};
/// use axum::Json;
/// use serde_json::json;
///
/// async fn handler(name: String) -> ApiResult<Json<serde_json::Value>> {
///     if name.is_empty() {
///         return Err(ApiError::BadRequest("Name is required".to_string()));
///     }
///     Ok(Json(json!({ "success": true })))
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shiftorl_shared::forms::FormError;
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400): validation failures and unreadable bodies
    BadRequest(String),

    /// Unauthorized (401)
    Unauthorized(String),

    /// Not found (404)
    NotFound(String),

    /// Method not allowed (405)
    MethodNotAllowed,

    /// Email provider key missing (500)
    ServiceNotConfigured(String),

    /// Email provider failed (500); `debug` is passed through to the client
    UpstreamFailure {
        message: String,
        debug: Option<serde_json::Value>,
    },

    /// Internal server error (500); `detail` is logged, never returned
    InternalError { message: String, detail: String },
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,

    /// Human-readable error message
    pub error: String,

    /// Upstream detail for failed email sends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<serde_json::Value>,
}

impl ApiError {
    pub fn internal(message: impl Into<String>, detail: impl fmt::Display) -> Self {
        ApiError::InternalError {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Unreadable request body: 400 with the handler's generic message
    pub fn malformed_body(message: impl Into<String>, detail: impl fmt::Display) -> Self {
        tracing::warn!(error = %detail, "Rejected malformed request body");
        ApiError::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::ServiceNotConfigured(_)
            | ApiError::UpstreamFailure { .. }
            | ApiError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::MethodNotAllowed => write!(f, "Method not allowed"),
            ApiError::ServiceNotConfigured(msg) => write!(f, "Service not configured: {}", msg),
            ApiError::UpstreamFailure { message, .. } => write!(f, "Upstream failure: {}", message),
            ApiError::InternalError { message, detail } => {
                write!(f, "Internal error: {} ({})", message, detail)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error, upstream) = match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg) => (msg, None),
            ApiError::MethodNotAllowed => ("Method not allowed".to_string(), None),
            ApiError::ServiceNotConfigured(msg) => {
                tracing::error!("RESEND_API_KEY not configured");
                (msg, None)
            }
            ApiError::UpstreamFailure { message, debug: detail } => {
                tracing::error!(upstream = ?detail, "Email provider failure: {}", message);
                (message, detail)
            }
            ApiError::InternalError { message, detail } => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", detail);
                (message, None)
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error,
            debug: upstream,
        });

        (status, body).into_response()
    }
}

/// Validation failures carry their own visitor-facing message
impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        ApiError::BadRequest(err.message.to_string())
    }
}
