/// Employer hiring inquiry endpoint
///
/// # Endpoint
///
/// ```text
/// POST /submit-hire-inquiry
/// ```
///
/// Like applications, hiring inquiries are not stored: the email to the
/// hiring inbox is the record, so a failed send fails the request with a
/// hint about the likely cause.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;
use shiftorl_shared::{
    email::{compose, MailError},
    forms::HireInquiryForm,
};
use tracing::info;

pub const SUCCESS_MESSAGE: &str =
    "Inquiry submitted successfully! We will get back to you within 3 business days.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email service not configured. Please contact support at hire@shiftorl.site";
pub const FAILURE_MESSAGE: &str =
    "Failed to process inquiry. Please try again or contact hire@shiftorl.site";

const SEND_FAILED_PREFIX: &str = "Failed to send email. ";
const INVALID_KEY_HINT: &str = "The email service API key is invalid or expired. \
     Please check your Resend API key configuration. Contact hire@shiftorl.site if this persists.";
const UNVERIFIED_DOMAIN_HINT: &str = "The sender domain (info@shiftorl.site) is not verified in Resend. \
     Please verify your domain. Contact hire@shiftorl.site if this persists.";
const CONTACT_US_HINT: &str = "Please contact us directly at hire@shiftorl.site";

/// Hire inquiry response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HireInquiryResponse {
    pub success: bool,
    pub message: String,

    /// Provider message ID
    pub email_id: String,
}

pub async fn submit_hire_inquiry(
    State(state): State<AppState>,
    payload: Result<Json<HireInquiryForm>, JsonRejection>,
) -> ApiResult<Json<HireInquiryResponse>> {
    let Json(form) = payload.map_err(|e| ApiError::malformed_body(FAILURE_MESSAGE, e))?;
    form.check()?;

    if !state.mailer.is_configured() {
        return Err(ApiError::ServiceNotConfigured(NOT_CONFIGURED_MESSAGE.to_string()));
    }

    let email = compose::hire_email(&form, &state.mail_routes(), Utc::now());
    info!(
        company = %form.company_name,
        subject = %email.subject,
        reply_to = ?email.reply_to,
        "Sending hiring inquiry email"
    );

    let sent = state.mailer.send(&email).await.map_err(send_failure)?;
    info!(email_id = %sent.id, "Hiring inquiry email sent");

    Ok(Json(HireInquiryResponse {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
        email_id: sent.id,
    }))
}

/// Visitor-facing explanation for a failed send, by upstream status
pub fn failure_message(status: Option<u16>) -> String {
    let hint = match status {
        Some(401) => INVALID_KEY_HINT,
        Some(403) => UNVERIFIED_DOMAIN_HINT,
        _ => CONTACT_US_HINT,
    };
    format!("{SEND_FAILED_PREFIX}{hint}")
}

fn send_failure(err: MailError) -> ApiError {
    let debug = err.status().map(|status| {
        json!({
            "status": status,
            "response": err.body().unwrap_or_default(),
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    });

    tracing::error!(error = %err, "Hiring inquiry email failed");
    ApiError::UpstreamFailure {
        message: failure_message(err.status()),
        debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_by_status() {
        assert!(failure_message(Some(401))
            .starts_with("Failed to send email. The email service API key"));
        assert!(failure_message(Some(403)).contains("is not verified in Resend"));
        assert_eq!(
            failure_message(Some(500)),
            "Failed to send email. Please contact us directly at hire@shiftorl.site"
        );
        assert_eq!(failure_message(None), failure_message(Some(502)));
    }
}
