/// Input validation utilities
use crate::error::RelayError;
use crate::models::Submission;
use regex::Regex;

lazy_static::lazy_static! {
    /// Deliberately loose: `<non-space>@<non-space>.<non-space>`
    static ref EMAIL_REGEX: Regex = Regex::new(r"^\S+@\S+\.\S+$").unwrap();
}

pub fn is_valid_email_format(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_email_address(email: &str) -> Result<(), RelayError> {
    if is_valid_email_format(email) {
        Ok(())
    } else {
        Err(RelayError::InvalidEmail(format!(
            "Invalid email address: {}",
            email
        )))
    }
}

pub fn validate_required_fields(submission: &Submission) -> Result<(), RelayError> {
    let missing = submission.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RelayError::MissingFields(missing.join(", ")))
    }
}
