/// Mailer that records messages instead of sending them
///
/// Used by the API tests and for local runs without a Resend key. It can
/// also be told to behave like an unconfigured or rejecting provider.

use super::{MailError, MailResult, Mailer, OutboundEmail, SentEmail};
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    Accept,
    Unconfigured,
    Reject(u16),
}

pub struct RecordingMailer {
    behavior: Behavior,
    sent: Mutex<Vec<OutboundEmail>>,
    attempts: Mutex<usize>,
}

impl RecordingMailer {
    /// Accepts every message
    pub fn new() -> Self {
        Self::with_behavior(Behavior::Accept)
    }

    /// Reports itself unconfigured, like a missing API key
    pub fn unconfigured() -> Self {
        Self::with_behavior(Behavior::Unconfigured)
    }

    /// Rejects every message with the given upstream status
    pub fn rejecting(status: u16) -> Self {
        Self::with_behavior(Behavior::Reject(status))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            sent: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
        }
    }

    /// Messages accepted so far
    pub async fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().await.clone()
    }

    /// Calls to `send`, accepted or not
    pub async fn attempts(&self) -> usize {
        *self.attempts.lock().await
    }
}

impl Default for RecordingMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    fn is_configured(&self) -> bool {
        self.behavior != Behavior::Unconfigured
    }

    async fn send(&self, email: &OutboundEmail) -> MailResult<SentEmail> {
        *self.attempts.lock().await += 1;

        match self.behavior {
            Behavior::Unconfigured => Err(MailError::NotConfigured),
            Behavior::Reject(status) => Err(MailError::Rejected {
                status,
                body: format!(r#"{{"statusCode":{status},"message":"rejected by test mailer"}}"#),
            }),
            Behavior::Accept => {
                self.sent.lock().await.push(email.clone());
                Ok(SentEmail {
                    id: Uuid::new_v4().to_string(),
                })
            }
        }
    }
}
