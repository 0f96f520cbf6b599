/// Turns a validated form into the message sent to the agency inbox
use chrono::{DateTime, Utc};

use super::{templates, OutboundEmail};
use crate::forms::{ApplicationForm, ContactForm, HireInquiryForm, ResumeUpload};

/// Sender and inbox addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRoutes {
    pub from: String,

    /// Receives contact inquiries and job applications
    pub info_to: String,

    /// Receives employer hiring inquiries
    pub hire_to: String,
}

impl Default for MailRoutes {
    fn default() -> Self {
        Self {
            from: "ShiftORL <info@shiftorl.site>".to_string(),
            info_to: "info@shiftorl.site".to_string(),
            hire_to: "hire@shiftorl.site".to_string(),
        }
    }
}

pub fn contact_email(form: &ContactForm, routes: &MailRoutes, now: DateTime<Utc>) -> OutboundEmail {
    OutboundEmail {
        from: routes.from.clone(),
        to: vec![routes.info_to.clone()],
        subject: format!("New Contact: {}", form.name),
        html: templates::render_contact(form, now),
        reply_to: Some(form.email.clone()),
        attachments: Vec::new(),
    }
}

/// The resume, when present, travels as a base64 attachment
pub fn application_email(
    form: &ApplicationForm,
    resume: Option<&ResumeUpload>,
    routes: &MailRoutes,
    now: DateTime<Utc>,
) -> OutboundEmail {
    let subject = if form.position.is_empty() {
        format!("New Application: {}", form.full_name())
    } else {
        format!("New Application: {} - {}", form.full_name(), form.position)
    };

    OutboundEmail {
        from: routes.from.clone(),
        to: vec![routes.info_to.clone()],
        subject,
        html: templates::render_application(form, resume, now),
        reply_to: Some(form.email.clone()),
        attachments: resume.map(ResumeUpload::to_attachment).into_iter().collect(),
    }
}

pub fn hire_email(
    form: &HireInquiryForm,
    routes: &MailRoutes,
    now: DateTime<Utc>,
) -> OutboundEmail {
    OutboundEmail {
        from: routes.from.clone(),
        to: vec![routes.hire_to.clone()],
        subject: format!(
            "New Hiring Inquiry: {} - {}",
            form.company_name,
            form.position_or_default()
        ),
        html: templates::render_hire(form, now),
        reply_to: Some(form.email.clone()),
        attachments: Vec::new(),
    }
}
