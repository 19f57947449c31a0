/// Contact-form submission models
use serde::{Deserialize, Serialize};

/// Submission as posted by the browser
///
/// Every key is optional on the wire; missing keys and `null` values are
/// treated as empty strings so the required-field check can report them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Honeypot
    #[serde(default)]
    pub website: Option<String>,
}

/// One-shot submission with trimmed required fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub honeypot: String,
}

impl Submission {
    /// Names of required fields that are empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Whether the decoy field was filled in
    pub fn is_spam(&self) -> bool {
        !self.honeypot.is_empty()
    }

    /// Domain part of the submitted email address
    pub fn email_domain(&self) -> Option<&str> {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .filter(|domain| !domain.is_empty())
    }
}

impl From<SubmissionRequest> for Submission {
    fn from(req: SubmissionRequest) -> Self {
        let trimmed = |value: Option<String>| value.unwrap_or_default().trim().to_string();

        Self {
            name: trimmed(req.name),
            email: trimmed(req.email),
            subject: trimmed(req.subject),
            message: trimmed(req.message),
            // Not trimmed: any content at all marks an automated submitter
            honeypot: req.website.unwrap_or_default(),
        }
    }
}

/// Response body returned by the endpoint for every outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionResponse {
    pub message: String,
}

impl SubmissionResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
