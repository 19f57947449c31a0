/// Local form validation, run before anything is sent
use crate::constants::{
    MSG_ENTER_EMAIL, MSG_ENTER_MESSAGE, MSG_ENTER_NAME, MSG_ENTER_SUBJECT, MSG_ENTER_VALID_EMAIL,
};
use formrelay_core::models::SubmissionRequest;
use formrelay_core::utils::is_valid_email_format;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required inputs of the contact form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Element id of the input
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Current contents of the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Hidden honeypot input
    pub website: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    /// Copy with the required fields trimmed; the honeypot is left as typed
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            website: self.website.clone(),
        }
    }

    /// Wire payload for the submission endpoint
    pub fn to_request(&self) -> SubmissionRequest {
        SubmissionRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            subject: Some(self.subject.clone()),
            message: Some(self.message.clone()),
            website: Some(self.website.clone()),
        }
    }
}

/// Validates already-trimmed fields, returning every error in field order
///
/// An empty email only reports the missing value, not the format.
pub fn validate(fields: &FormFields) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if fields.name.is_empty() {
        errors.push(FieldError {
            field: FormField::Name,
            message: MSG_ENTER_NAME,
        });
    }

    if fields.email.is_empty() {
        errors.push(FieldError {
            field: FormField::Email,
            message: MSG_ENTER_EMAIL,
        });
    } else if !is_valid_email_format(&fields.email) {
        errors.push(FieldError {
            field: FormField::Email,
            message: MSG_ENTER_VALID_EMAIL,
        });
    }

    if fields.subject.is_empty() {
        errors.push(FieldError {
            field: FormField::Subject,
            message: MSG_ENTER_SUBJECT,
        });
    }

    if fields.message.is_empty() {
        errors.push(FieldError {
            field: FormField::Message,
            message: MSG_ENTER_MESSAGE,
        });
    }

    errors
}
