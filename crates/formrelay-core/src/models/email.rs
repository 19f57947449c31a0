/// Outbound email models
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relayed contact message, alive only for the duration of one delivery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: EmailAddress,
    pub to: EmailAddress,
    pub reply_to: EmailAddress,
    pub subject: String,
    pub body: EmailBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    pub address: String,
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    pub fn with_name(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Some(name.into()),
        }
    }
}

/// Header form: `Name <address>` or the bare address
impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EmailBody {
    pub text: String,
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_display() {
        let addr = EmailAddress::with_name("no-reply@example.com", "Jo Doe");
        assert_eq!(addr.to_string(), "Jo Doe <no-reply@example.com>");

        let addr = EmailAddress::new("hello@example.com");
        assert_eq!(addr.to_string(), "hello@example.com");
    }

    #[test]
    fn test_email_address_serialization() {
        let addr = EmailAddress::with_name("test@example.com", "Test User");

        let json = serde_json::to_string(&addr).unwrap();
        let deserialized: EmailAddress = serde_json::from_str(&json).unwrap();

        assert_eq!(addr, deserialized);
    }
}
