use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{check_fields, null_as_empty, required_email, FormError, FormViolation};

/// Footer newsletter sign-up: `{email}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SubscriptionForm {
    #[validate(custom(function = "required_email"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
}

impl SubscriptionForm {
    pub fn check(&self) -> Result<(), FormError> {
        check_fields(self, message_for)
    }
}

fn message_for(violation: FormViolation) -> &'static str {
    match violation {
        FormViolation::InvalidEmail => "Please enter a valid email address",
        _ => "Email is required",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_email_rules() {
        let form = SubscriptionForm {
            email: "jane@example.com".to_string(),
        };
        assert!(form.check().is_ok());
        assert_eq!(
            SubscriptionForm::default().check().unwrap_err().violation,
            FormViolation::MissingRequired
        );

        let form = SubscriptionForm {
            email: "jane".to_string(),
        };
        assert_eq!(
            form.check().unwrap_err().violation,
            FormViolation::InvalidEmail
        );
    }
}
