/// Newsletter subscription endpoint
///
/// # Endpoint
///
/// ```text
/// POST /subscribe
/// ```
///
/// A repeat sign-up is not an error for the visitor: it answers 200 with
/// `alreadySubscribed: true`.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use shiftorl_shared::{forms::SubscriptionForm, store::StoreError};
use tracing::info;

pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing!";
pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "You are already subscribed!";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Subscription response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub already_subscribed: bool,

    pub message: String,
}

pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<SubscriptionForm>, JsonRejection>,
) -> ApiResult<Json<SubscribeResponse>> {
    let Json(form) = payload.map_err(|e| ApiError::malformed_body(FAILURE_MESSAGE, e))?;
    form.check()?;

    let already_subscribed = match state.store.insert_subscription(&form.email).await {
        Ok(subscription) => {
            info!(subscription_id = %subscription.id, "New email subscription");
            false
        }
        Err(StoreError::Duplicate) => {
            info!("Repeat email subscription");
            true
        }
        Err(e) => return Err(ApiError::internal(FAILURE_MESSAGE, e)),
    };

    let message = if already_subscribed {
        ALREADY_SUBSCRIBED_MESSAGE
    } else {
        SUBSCRIBED_MESSAGE
    };

    Ok(Json(SubscribeResponse {
        success: true,
        already_subscribed,
        message: message.to_string(),
    }))
}
