/// Job application endpoint
///
/// # Endpoint
///
/// ```text
/// POST /submit-application
/// Content-Type: multipart/form-data
/// ```
///
/// Text parts carry the application fields (`firstName`, `lastName`,
/// `email`, `phone`, `position`, ...). An optional `resume` file part is
/// attached to the notification email. Nothing is stored; the email is the
/// only record, so a failed send fails the request.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use shiftorl_shared::{
    email::{compose, MailError},
    forms::{ApplicationForm, ResumeUpload},
};
use tracing::{debug, info, warn};

pub const SUCCESS_MESSAGE: &str =
    "Application submitted successfully! We will review your application and get back to you within 3 business days.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email service not configured. Please contact info@shiftorl.site";
pub const SEND_FAILED_MESSAGE: &str =
    "Failed to send application. Please email your resume to info@shiftorl.site";
pub const FAILURE_MESSAGE: &str =
    "Failed to process application. Please try again or email info@shiftorl.site";

/// Name of the multipart file part
const RESUME_FIELD: &str = "resume";

/// Application response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub success: bool,
    pub message: String,

    /// Provider message ID
    pub email_id: String,
}

pub async fn submit_application(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<ApplicationResponse>> {
    let multipart = multipart.map_err(|e| ApiError::malformed_body(FAILURE_MESSAGE, e))?;
    let (form, resume) = read_submission(multipart).await?;

    form.check()?;
    if let Some(resume) = &resume {
        resume.check()?;
    }

    if !state.mailer.is_configured() {
        return Err(ApiError::ServiceNotConfigured(NOT_CONFIGURED_MESSAGE.to_string()));
    }

    let email =
        compose::application_email(&form, resume.as_ref(), &state.mail_routes(), Utc::now());
    info!(
        applicant = %form.full_name(),
        resume = resume.as_ref().map(|r| r.filename.as_str()),
        "Sending application email"
    );

    let sent = state.mailer.send(&email).await.map_err(send_failure)?;
    info!(email_id = %sent.id, "Application email sent");

    Ok(Json(ApplicationResponse {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
        email_id: sent.id,
    }))
}

/// Splits the multipart body into text fields and the resume part
///
/// An empty file part counts as no resume.
async fn read_submission(
    mut multipart: Multipart,
) -> ApiResult<(ApplicationForm, Option<ResumeUpload>)> {
    let mut form = ApplicationForm::default();
    let mut resume = None;

    while let Some(field) = multipart.next_field().await.map_err(unreadable_body)? {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_FIELD {
            let filename = field.file_name().unwrap_or(RESUME_FIELD).to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(unreadable_body)?;

            if !bytes.is_empty() {
                debug!(
                    filename = %filename,
                    content_type = %content_type,
                    size = bytes.len(),
                    "Received resume"
                );
                resume = Some(ResumeUpload {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field.text().await.map_err(unreadable_body)?;
        if !form.set_field(&name, value) {
            debug!(field = %name, "Ignoring unknown application field");
        }
    }

    Ok((form, resume))
}

/// A body cut off by the upload limit can only be an oversized resume
fn unreadable_body(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!(error = %err, "Application body exceeded the upload limit");
        return ResumeUpload::too_large().into();
    }
    ApiError::malformed_body(FAILURE_MESSAGE, err)
}

fn send_failure(err: MailError) -> ApiError {
    let debug = err.status().map(|status| {
        json!({
            "status": status,
            "response": err.body().unwrap_or_default(),
        })
    });

    tracing::error!(error = %err, "Application email failed");
    ApiError::UpstreamFailure {
        message: SEND_FAILED_MESSAGE.to_string(),
        debug,
    }
}
