/// Shared constants for the formrelay system
///
/// Response messages are part of the public contract with the browser
/// client, which displays them verbatim.

// ============================================================================
// Response Messages
// ============================================================================

/// Returned for genuine deliveries and for filtered spam alike
pub const MSG_SUCCESS: &str = "Thank you! Your message has been received.";

pub const MSG_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

pub const MSG_MISSING_FIELDS: &str = "All fields are required.";

pub const MSG_INVALID_EMAIL: &str = "Please provide a valid email address.";

pub const MSG_UNDELIVERABLE_DOMAIN: &str = "The email address domain is not valid.";

pub const MSG_INVALID_BODY: &str = "Invalid request body.";

pub const MSG_SERVER_CONFIG: &str = "Server configuration error.";

pub const MSG_DELIVERY_FAILED: &str =
    "Sorry, your message could not be sent. Please try again later.";

// ============================================================================
// Submission Fields
// ============================================================================

/// Decoy field left empty by humans and filled by bots
pub const HONEYPOT_FIELD: &str = "website";

/// Path the endpoint is mounted on
pub const SUBMIT_PATH: &str = "/api/submit-form";

pub const HEALTH_PATH: &str = "/api/health";

// ============================================================================
// Outbound Email
// ============================================================================

/// Label prepended to every relayed subject
pub const SUBJECT_LABEL: &str = "[Contact Form]";

/// Display name used when sanitization strips the whole submitted name
pub const FALLBACK_DISPLAY_NAME: &str = "Website Visitor";

// ============================================================================
// Deployment Defaults
// ============================================================================

pub const DEFAULT_DESTINATION: &str = "hello@example.com";

pub const DEFAULT_SENDER: &str = "no-reply@example.com";

pub const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Maximum accepted request body (the form has four short text fields)
pub const MAX_BODY_BYTES: usize = 64 * 1024;

// ============================================================================
// Credential Variables
// ============================================================================

pub const ENV_SMTP_URL: &str = "SMTP_URL";

pub const ENV_RESEND_API_KEY: &str = "RESEND_API_KEY";

pub const ENV_AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";

pub const ENV_AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_path_is_absolute() {
        assert!(SUBMIT_PATH.starts_with('/'));
        assert!(HEALTH_PATH.starts_with("/api/"));
    }

    #[test]
    fn test_subject_label_has_no_trailing_space() {
        assert_eq!(SUBJECT_LABEL.trim(), SUBJECT_LABEL);
    }
}
