/// Outbound notification email
///
/// Every form submission ends in one email to the agency inbox. The
/// `Mailer` trait is the boundary to the transactional email provider so
/// handlers can be exercised without the network.
///
/// # Modules
///
/// - `resend`: HTTP client for the Resend API
/// - `recording`: in-process mailer that keeps what it was asked to send
/// - `templates`: HTML bodies for each form
/// - `compose`: subject/recipient rules that turn a form into an `OutboundEmail`
///
/// # Example
///
/// ```no_run
/// use shiftorl_shared::email::{Mailer, OutboundEmail, resend::ResendMailer};
///
/// # async fn example() -> Result<(), shiftorl_shared::email::MailError> {
/// let mailer = ResendMailer::new(Some("re_123".to_string()), ResendMailer::DEFAULT_ENDPOINT);
/// let email = OutboundEmail {
///     from: "ShiftORL <info@shiftorl.site>".to_string(),
///     to: vec!["info@shiftorl.site".to_string()],
///     subject: "Hello".to_string(),
///     html: "<p>Hi</p>".to_string(),
///     reply_to: None,
///     attachments: Vec::new(),
/// };
/// let sent = mailer.send(&email).await?;
/// println!("queued as {}", sent.id);
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod compose;
pub mod recording;
pub mod resend;
pub mod templates;

pub use compose::MailRoutes;
pub use recording::RecordingMailer;
pub use resend::ResendMailer;

/// Mail error types
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// No API key is configured
    #[error("Email service not configured")]
    NotConfigured,

    /// The provider answered with a non-2xx status
    #[error("Email provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request never got a response
    #[error("Email provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body could not be read
    #[error("Unexpected email provider response: {0}")]
    InvalidResponse(String),
}

impl MailError {
    /// Upstream HTTP status, if the provider answered
    pub fn status(&self) -> Option<u16> {
        match self {
            MailError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Upstream response body, if the provider answered
    pub fn body(&self) -> Option<&str> {
        match self {
            MailError::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Mail result type alias
pub type MailResult<T> = Result<T, MailError>;

/// Named file attached to an email; `content` is standard base64
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub content: String,
}

/// Message handed to the provider, serialized as the Resend request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// Provider acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    /// Provider-assigned message ID
    pub id: String,
}

/// Notification boundary
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Whether an API key is available. Handlers that cannot work without
    /// email check this before doing anything else.
    fn is_configured(&self) -> bool;

    /// Sends one message, single attempt, no retry
    async fn send(&self, email: &OutboundEmail) -> MailResult<SentEmail>;
}
