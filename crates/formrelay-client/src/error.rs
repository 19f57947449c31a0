/// Error types for the browser-side client
use crate::constants::MSG_GENERIC_FAILURE;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Submission rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("A submission is already in progress")]
    Busy,
}

impl ClientError {
    /// Text for the form's status line
    ///
    /// The server's own message when it sent one, the generic fallback
    /// otherwise. Transport details are never shown.
    pub fn status_text(&self) -> String {
        match self {
            ClientError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => MSG_GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidEndpoint(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_prefers_server_message() {
        let err = ClientError::Rejected {
            status: 400,
            message: Some("All fields are required.".to_string()),
        };
        assert_eq!(err.status_text(), "All fields are required.");
    }

    #[test]
    fn test_status_text_falls_back() {
        let err = ClientError::Rejected {
            status: 502,
            message: None,
        };
        assert_eq!(err.status_text(), MSG_GENERIC_FAILURE);

        let err = ClientError::Rejected {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(err.status_text(), MSG_GENERIC_FAILURE);

        assert_eq!(
            ClientError::InvalidResponse("eof".to_string()).status_text(),
            MSG_GENERIC_FAILURE
        );
    }
}
