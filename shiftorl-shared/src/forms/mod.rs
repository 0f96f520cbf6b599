/// Submitted form payloads and their validation rules
///
/// Every form is validated in the same order: required fields, then (for
/// the hire form) the three delegation fields, then the email format, then
/// (for the application form) the resume upload. The first broken rule
/// decides the user-facing message.
///
/// Field rules are declared with `validator` derives; the custom rule
/// functions below tag each failure with a code so the rule order can be
/// recovered from the unordered `ValidationErrors` map.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors};

pub mod application;
pub mod contact;
pub mod hire;
pub mod subscription;

pub use application::{ApplicationForm, ResumeUpload};
pub use contact::ContactForm;
pub use hire::HireInquiryForm;
pub use subscription::SubscriptionForm;

/// Error code for an empty required field
pub const CODE_REQUIRED: &str = "required";

/// Error code for an empty delegation field on the hire form
pub const CODE_DELEGATION_REQUIRED: &str = "delegation_required";

/// Error code for a malformed email address
pub const CODE_EMAIL_FORMAT: &str = "email_format";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email pattern is a valid regex")
});

/// Checks an address against the site's email rule: something, `@`,
/// something, a dot, something, with no whitespace or extra `@`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// The rule a submission broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormViolation {
    MissingRequired,
    MissingDelegation,
    InvalidEmail,
    InvalidFileType,
    FileTooLarge,
}

/// A rejected submission: the broken rule plus the message shown to the
/// visitor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormError {
    pub violation: FormViolation,
    pub message: &'static str,
}

impl FormError {
    pub fn new(violation: FormViolation, message: &'static str) -> Self {
        Self { violation, message }
    }
}

/// Reads a JSON `null` the same as a missing field: empty
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(CODE_REQUIRED));
    }
    Ok(())
}

pub(crate) fn required_delegation(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(CODE_DELEGATION_REQUIRED));
    }
    Ok(())
}

/// Required, then well-formed
pub(crate) fn required_email(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if !is_valid_email(value) {
        return Err(ValidationError::new(CODE_EMAIL_FORMAT));
    }
    Ok(())
}

/// Picks the highest-priority violation out of a `ValidationErrors` map
pub fn first_violation(errors: &ValidationErrors) -> Option<FormViolation> {
    let has = |code: &str| {
        errors
            .field_errors()
            .values()
            .any(|errs| errs.iter().any(|e| e.code == code))
    };

    if has(CODE_REQUIRED) {
        Some(FormViolation::MissingRequired)
    } else if has(CODE_DELEGATION_REQUIRED) {
        Some(FormViolation::MissingDelegation)
    } else if has(CODE_EMAIL_FORMAT) {
        Some(FormViolation::InvalidEmail)
    } else {
        None
    }
}

/// Runs the derived rules and maps the first violation to a message
pub(crate) fn check_fields<F>(
    form: &F,
    message_for: fn(FormViolation) -> &'static str,
) -> Result<(), FormError>
where
    F: Validate,
{
    match form.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let violation = first_violation(&errors)
                .unwrap_or(FormViolation::MissingRequired);
            Err(FormError::new(violation, message_for(violation)))
        }
    }
}
