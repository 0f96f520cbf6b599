use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    check_fields, null_as_empty, required, required_delegation, required_email, FormError,
    FormViolation,
};

/// Employer hiring inquiry, posted as camelCase JSON
///
/// The three `delegation` fields are the responsibilities the employer
/// wants to hand off; they are required, but checked after the contact
/// fields so the visitor gets the more basic message first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct HireInquiryForm {
    #[validate(custom(function = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub company_name: String,

    #[validate(custom(function = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub contact_name: String,

    #[validate(custom(function = "required_email"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,

    #[validate(custom(function = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub industry: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company_size: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub position_title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub position_level: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub timeline: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub budget: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub requirements: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub benefits: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,

    #[validate(custom(function = "required_delegation"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub delegation1: String,

    #[validate(custom(function = "required_delegation"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub delegation2: String,

    #[validate(custom(function = "required_delegation"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub delegation3: String,
}

impl HireInquiryForm {
    pub fn check(&self) -> Result<(), FormError> {
        check_fields(self, message_for)
    }

    /// Position title, or a stand-in for the email subject
    pub fn position_or_default(&self) -> &str {
        if self.position_title.is_empty() {
            "Position Inquiry"
        } else {
            &self.position_title
        }
    }

    pub fn has_position_details(&self) -> bool {
        [
            &self.position_title,
            &self.position_level,
            &self.timeline,
            &self.budget,
        ]
        .iter()
        .any(|s| !s.is_empty())
    }

    pub fn delegations(&self) -> [&str; 3] {
        [
            self.delegation1.as_str(),
            self.delegation2.as_str(),
            self.delegation3.as_str(),
        ]
    }
}

fn message_for(violation: FormViolation) -> &'static str {
    match violation {
        FormViolation::MissingDelegation => "Please fill in all three delegation opportunities.",
        FormViolation::InvalidEmail => "Please enter a valid email address.",
        _ => {
            "Missing required fields. Please fill in company name, contact name, email, and phone."
        }
    }
}
