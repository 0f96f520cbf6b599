use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    check_fields, null_as_empty, required, required_email, FormError, FormViolation,
};
use crate::email::Attachment;

/// Largest resume accepted: 10 MiB
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

/// MIME types accepted for the resume: PDF, DOC and DOCX
pub const ALLOWED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Job application text fields, sent as multipart/form-data
///
/// Optional fields use the empty string for "not given", matching what a
/// browser form posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    #[validate(custom(function = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,

    #[validate(custom(function = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,

    #[validate(custom(function = "required_email"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,

    #[validate(custom(function = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub position: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub experience: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub skill1: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub skill2: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub skill3: String,
}

impl ApplicationForm {
    /// Assigns a multipart text part by its form name. Returns false for
    /// names the form does not know.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "position" => &mut self.position,
            "experience" => &mut self.experience,
            "location" => &mut self.location,
            "message" => &mut self.message,
            "skill1" => &mut self.skill1,
            "skill2" => &mut self.skill2,
            "skill3" => &mut self.skill3,
            _ => return false,
        };
        *slot = value;
        true
    }

    pub fn check(&self) -> Result<(), FormError> {
        check_fields(self, message_for)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Skills that were filled in, in form order
    pub fn skills(&self) -> Vec<&str> {
        [&self.skill1, &self.skill2, &self.skill3]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn message_for(violation: FormViolation) -> &'static str {
    match violation {
        FormViolation::InvalidEmail => "Please enter a valid email address.",
        FormViolation::InvalidFileType => {
            "Invalid file type. Please upload a PDF, DOC, or DOCX file."
        }
        FormViolation::FileTooLarge => "File too large. Please upload a file smaller than 10MB.",
        _ => "Missing required fields. Please fill in first name, last name, email, and phone.",
    }
}

/// Resume file part of an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub filename: String,

    /// MIME type declared by the browser for the part
    pub content_type: String,

    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    /// File type first, then size
    pub fn check(&self) -> Result<(), FormError> {
        if !ALLOWED_RESUME_TYPES.contains(&self.content_type.as_str()) {
            let violation = FormViolation::InvalidFileType;
            return Err(FormError::new(violation, message_for(violation)));
        }

        if self.bytes.len() > MAX_RESUME_BYTES {
            return Err(Self::too_large());
        }

        Ok(())
    }

    /// Rejection for a file too big to accept, including one cut off by
    /// the request body limit before it was fully read
    pub fn too_large() -> FormError {
        let violation = FormViolation::FileTooLarge;
        FormError::new(violation, message_for(violation))
    }

    pub fn size_mb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0 / 1024.0
    }

    /// Base64-encodes the file as a named email attachment
    pub fn to_attachment(&self) -> Attachment {
        Attachment {
            filename: self.filename.clone(),
            content: STANDARD.encode(&self.bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ApplicationForm {
        ApplicationForm {
            first_name: "Ana".to_string(),
            last_name: "Rivera".to_string(),
            email: "ana@example.com".to_string(),
            phone: "407-555-0100".to_string(),
            ..Default::default()
        }
    }

    fn pdf(len: usize) -> ResumeUpload {
        ResumeUpload {
            filename: "resume.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0x25; len],
        }
    }

    #[test]
    fn test_required_fields() {
        assert!(valid().check().is_ok());

        let form = ApplicationForm {
            phone: String::new(),
            ..valid()
        };
        let err = form.check().unwrap_err();
        assert_eq!(err.violation, FormViolation::MissingRequired);
        assert!(err.message.starts_with("Missing required fields"));
    }

    #[test]
    fn test_malformed_email() {
        let form = ApplicationForm {
            email: "not-an-email".to_string(),
            ..valid()
        };
        assert_eq!(
            form.check().unwrap_err().message,
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_set_field_maps_form_names() {
        let mut form = ApplicationForm::default();
        assert!(form.set_field("firstName", "Ana".to_string()));
        assert!(form.set_field("skill3", "SQL".to_string()));
        assert!(!form.set_field("resume", "x".to_string()));
        assert_eq!(form.first_name, "Ana");
        assert_eq!(form.skills(), vec!["SQL"]);
    }

    #[test]
    fn test_resume_type_allow_list() {
        for ty in ALLOWED_RESUME_TYPES {
            let upload = ResumeUpload {
                content_type: ty.to_string(),
                ..pdf(10)
            };
            assert!(upload.check().is_ok(), "{ty}");
        }

        let upload = ResumeUpload {
            content_type: "text/plain".to_string(),
            ..pdf(10)
        };
        assert_eq!(
            upload.check().unwrap_err().violation,
            FormViolation::InvalidFileType
        );
    }

    #[test]
    fn test_resume_size_limit_is_inclusive() {
        assert!(pdf(MAX_RESUME_BYTES).check().is_ok());
        let err = pdf(MAX_RESUME_BYTES + 1).check().unwrap_err();
        assert_eq!(err.violation, FormViolation::FileTooLarge);
        assert_eq!(
            err.message,
            "File too large. Please upload a file smaller than 10MB."
        );
    }

    #[test]
    fn test_too_large_matches_size_check() {
        let err = ResumeUpload::too_large();
        assert_eq!(err.violation, FormViolation::FileTooLarge);
        assert_eq!(err, pdf(MAX_RESUME_BYTES + 1).check().unwrap_err());
    }

    #[test]
    fn test_type_is_checked_before_size() {
        let upload = ResumeUpload {
            content_type: "text/plain".to_string(),
            ..pdf(MAX_RESUME_BYTES + 1)
        };
        assert_eq!(
            upload.check().unwrap_err().violation,
            FormViolation::InvalidFileType
        );
    }

    #[test]
    fn test_attachment_decodes_to_original_bytes() {
        let upload = pdf(1024);
        let attachment = upload.to_attachment();
        assert_eq!(attachment.filename, "resume.pdf");
        assert_eq!(STANDARD.decode(attachment.content).unwrap(), upload.bytes);
    }
}
