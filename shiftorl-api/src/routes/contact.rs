/// Contact form endpoint
///
/// # Endpoint
///
/// ```text
/// POST /process-contact-form
/// ```
///
/// The inquiry is stored first; the notification email is best-effort and
/// never fails the request once the row exists.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use shiftorl_shared::{email::compose, forms::ContactForm, models::contact_inquiry::ContactInquiry};
use tracing::{info, warn};

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry! We will get back to you within 3 business days.";
pub const FAILURE_MESSAGE: &str =
    "Failed to process your inquiry. Please try again or contact info@shiftorl.site";

/// Contact response
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,

    /// The stored inquiry
    pub data: ContactInquiry,
}

pub async fn process_contact_form(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let Json(form) = payload.map_err(|e| ApiError::malformed_body(FAILURE_MESSAGE, e))?;
    form.check()?;

    let inquiry = state
        .store
        .insert_contact_inquiry(form.to_record())
        .await
        .map_err(|e| ApiError::internal(FAILURE_MESSAGE, e))?;

    info!(inquiry_id = %inquiry.id, "Inquiry saved to database");

    if state.mailer.is_configured() {
        let email = compose::contact_email(&form, &state.mail_routes(), Utc::now());
        match state.mailer.send(&email).await {
            Ok(sent) => info!(email_id = %sent.id, "Contact notification sent"),
            Err(e) => warn!(error = %e, inquiry_id = %inquiry.id, "Contact notification failed"),
        }
    } else {
        warn!("RESEND_API_KEY not configured, skipping email");
    }

    Ok(Json(ContactResponse {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
        data: inquiry,
    }))
}
