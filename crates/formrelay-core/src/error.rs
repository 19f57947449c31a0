/// Error types for the formrelay system
use crate::constants::{
    MSG_DELIVERY_FAILED, MSG_INVALID_BODY, MSG_INVALID_EMAIL, MSG_MISSING_FIELDS,
    MSG_SERVER_CONFIG, MSG_UNDELIVERABLE_DOMAIN,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Undeliverable email domain: {0}")]
    UndeliverableDomain(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Timed out: {0}")]
    Timeout(String),
}

impl RelayError {
    /// Whether the fault was caused by the submitted input
    pub fn is_input_fault(&self) -> bool {
        matches!(
            self,
            Self::InvalidBody(_)
                | Self::MissingFields(_)
                | Self::InvalidEmail(_)
                | Self::UndeliverableDomain(_)
        )
    }

    /// HTTP status class the fault maps to at the endpoint boundary
    pub fn status_code(&self) -> u16 {
        if self.is_input_fault() { 400 } else { 500 }
    }

    /// Message safe to show the submitter; internal detail stays in logs
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Config(_) => MSG_SERVER_CONFIG,
            Self::InvalidBody(_) => MSG_INVALID_BODY,
            Self::MissingFields(_) => MSG_MISSING_FIELDS,
            Self::InvalidEmail(_) => MSG_INVALID_EMAIL,
            Self::UndeliverableDomain(_) => MSG_UNDELIVERABLE_DOMAIN,
            Self::Delivery(_) | Self::Timeout(_) => MSG_DELIVERY_FAILED,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err.to_string())
    }
}

impl From<lettre::error::Error> for RelayError {
    fn from(err: lettre::error::Error) -> Self {
        Self::Delivery(format!("Failed to build message: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::MissingFields("name".into()).status_code(), 400);
        assert_eq!(RelayError::InvalidEmail("x".into()).status_code(), 400);
        assert_eq!(
            RelayError::UndeliverableDomain("x.invalid".into()).status_code(),
            400
        );
        assert_eq!(RelayError::Config("SMTP_URL".into()).status_code(), 500);
        assert_eq!(RelayError::Delivery("refused".into()).status_code(), 500);
        assert_eq!(RelayError::Timeout("10s".into()).status_code(), 500);
    }

    #[test]
    fn test_public_message_hides_detail() {
        let err = RelayError::Delivery("535 authentication failed for user bob".into());
        assert_eq!(err.public_message(), MSG_DELIVERY_FAILED);
        assert!(!err.public_message().contains("bob"));

        let err = RelayError::Timeout("deadline has elapsed".into());
        assert_eq!(err.public_message(), MSG_DELIVERY_FAILED);
    }

    #[test]
    fn test_error_display() {
        let err = RelayError::Config("missing SMTP_URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing SMTP_URL");
    }
}
