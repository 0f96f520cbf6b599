use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    check_fields, null_as_empty, required, required_email, FormError, FormViolation,
};
use crate::models::contact_inquiry::CreateContactInquiry;

/// Contact form body: `{name, email, message}`
///
/// Absent fields deserialize as empty strings so they fail `required`
/// instead of failing JSON decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(custom(function = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,

    #[validate(custom(function = "required_email"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,

    #[validate(custom(function = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
}

impl ContactForm {
    pub fn check(&self) -> Result<(), FormError> {
        check_fields(self, message_for)
    }

    pub fn to_record(&self) -> CreateContactInquiry {
        CreateContactInquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

fn message_for(violation: FormViolation) -> &'static str {
    match violation {
        FormViolation::InvalidEmail => "Please enter a valid email address",
        _ => "All fields are required",
    }
}
