/// Resend transactional email client
///
/// One `POST {endpoint}` per message with bearer auth and the
/// `OutboundEmail` as JSON. The response status and body are logged in
/// full; a 2xx body is expected to be `{"id": "..."}`.

use super::{MailError, MailResult, Mailer, OutboundEmail, SentEmail};
use async_trait::async_trait;
use tracing::{debug, error, info};

pub struct ResendMailer {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl ResendMailer {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.resend.com/emails";

    /// Creates a client; `api_key = None` leaves the mailer unconfigured
    pub fn new(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_key, endpoint)
    }

    pub fn with_client(
        client: reqwest::Client,
        api_key: Option<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send(&self, email: &OutboundEmail) -> MailResult<SentEmail> {
        let api_key = self.api_key.as_deref().ok_or(MailError::NotConfigured)?;

        info!(
            from = %email.from,
            to = ?email.to,
            subject = %email.subject,
            attachments = email.attachments.len(),
            "Sending email"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), body = %body, "Email provider response");

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Email provider rejected message");
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let sent: SentEmail = serde_json::from_str(&body)
            .map_err(|e| MailError::InvalidResponse(format!("{e}: {body}")))?;

        info!(email_id = %sent.id, "Email sent");
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "ShiftORL <info@shiftorl.site>".to_string(),
            to: vec!["info@shiftorl.site".to_string()],
            subject: "Test".to_string(),
            html: "<p>x</p>".to_string(),
            reply_to: None,
            attachments: Vec::new(),
        }
    }

    #[test]
    fn test_empty_key_counts_as_unconfigured() {
        let mailer = ResendMailer::new(Some(String::new()), ResendMailer::DEFAULT_ENDPOINT);
        assert!(!mailer.is_configured());

        let mailer = ResendMailer::new(
            Some("re_test".to_string()),
            ResendMailer::DEFAULT_ENDPOINT,
        );
        assert!(mailer.is_configured());
        assert_eq!(mailer.endpoint(), "https://api.resend.com/emails");
    }

    #[tokio::test]
    async fn test_send_without_key_fails_before_any_request() {
        // Unroutable endpoint: reaching the network would surface a Transport error instead
        let mailer = ResendMailer::new(None, "http://127.0.0.1:9/emails");
        let err = mailer.send(&email()).await.unwrap_err();
        assert!(matches!(err, MailError::NotConfigured));
    }
}
