/// Configuration models
use crate::constants::{
    DEFAULT_DELIVERY_TIMEOUT_SECS, DEFAULT_DESTINATION, DEFAULT_LOOKUP_TIMEOUT_SECS,
    DEFAULT_RESEND_API_URL, DEFAULT_SENDER, ENV_AWS_ACCESS_KEY_ID, ENV_AWS_SECRET_ACCESS_KEY,
    ENV_RESEND_API_KEY, ENV_SMTP_URL, SUBJECT_LABEL,
};
use crate::error::RelayError;
use crate::utils::validation::is_valid_email_format;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Mechanism that actually transmits the relayed email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryProvider {
    /// Writes the submission to the structured log only
    #[default]
    Console,
    Smtp,
    Ses,
    Resend,
}

impl DeliveryProvider {
    /// Credential variables that must be present before any delivery
    pub fn required_credentials(&self) -> &'static [&'static str] {
        match self {
            Self::Console => &[],
            Self::Smtp => &[ENV_SMTP_URL],
            Self::Ses => &[ENV_AWS_ACCESS_KEY_ID, ENV_AWS_SECRET_ACCESS_KEY],
            Self::Resend => &[ENV_RESEND_API_KEY],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Smtp => "smtp",
            Self::Ses => "ses",
            Self::Resend => "resend",
        }
    }
}

impl fmt::Display for DeliveryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryProvider {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" | "log" => Ok(Self::Console),
            "smtp" => Ok(Self::Smtp),
            "ses" => Ok(Self::Ses),
            "resend" => Ok(Self::Resend),
            other => Err(RelayError::Config(format!(
                "Unknown delivery provider: {}",
                other
            ))),
        }
    }
}

/// Deployment-time settings, read once per cold start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySettings {
    /// Fixed destination of every relayed message
    pub destination: String,
    /// Address the relay sends from
    pub sender: String,
    pub subject_label: String,
    pub provider: DeliveryProvider,
    /// Resolve MX records of the submitter's domain before delivery
    pub verify_domain: bool,
    pub delivery_timeout: Duration,
    pub lookup_timeout: Duration,
    pub resend_api_url: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            destination: DEFAULT_DESTINATION.to_string(),
            sender: DEFAULT_SENDER.to_string(),
            subject_label: SUBJECT_LABEL.to_string(),
            provider: DeliveryProvider::default(),
            verify_domain: false,
            delivery_timeout: Duration::from_secs(DEFAULT_DELIVERY_TIMEOUT_SECS),
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
        }
    }
}

impl RelaySettings {
    /// Loads settings from the process environment
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let settings = Self {
            destination: get("CONTACT_DESTINATION").unwrap_or(defaults.destination),
            sender: get("CONTACT_SENDER").unwrap_or(defaults.sender),
            subject_label: get("CONTACT_SUBJECT_LABEL").unwrap_or(defaults.subject_label),
            provider: get("DELIVERY_PROVIDER")
                .map(|value| value.parse())
                .transpose()?
                .unwrap_or(defaults.provider),
            verify_domain: get("VERIFY_EMAIL_DOMAIN")
                .map(|value| parse_flag("VERIFY_EMAIL_DOMAIN", &value))
                .transpose()?
                .unwrap_or(defaults.verify_domain),
            delivery_timeout: get("DELIVERY_TIMEOUT_SECS")
                .map(|value| parse_secs("DELIVERY_TIMEOUT_SECS", &value))
                .transpose()?
                .unwrap_or(defaults.delivery_timeout),
            lookup_timeout: get("LOOKUP_TIMEOUT_SECS")
                .map(|value| parse_secs("LOOKUP_TIMEOUT_SECS", &value))
                .transpose()?
                .unwrap_or(defaults.lookup_timeout),
            resend_api_url: get("RESEND_API_URL").unwrap_or(defaults.resend_api_url),
        };

        settings
            .validate()
            .map_err(|e| RelayError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(settings)
    }

    /// Validates configuration is valid
    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_email_format(&self.destination) {
            return Err(format!("Invalid destination address: {}", self.destination));
        }

        if !is_valid_email_format(&self.sender) {
            return Err(format!("Invalid sender address: {}", self.sender));
        }

        if self.delivery_timeout.is_zero() || self.lookup_timeout.is_zero() {
            return Err("Timeouts must be > 0".to_string());
        }

        if url::Url::parse(&self.resend_api_url).is_err() {
            return Err(format!("Invalid Resend API URL: {}", self.resend_api_url));
        }

        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, RelayError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(RelayError::Config(format!("Invalid {}: {}", key, value))),
    }
}

fn parse_secs(key: &str, value: &str) -> Result<Duration, RelayError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| RelayError::Config(format!("Invalid {}: {}", key, e)))
}

/// Opaque delivery secrets; only their presence is validated
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    values: HashMap<String, String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the secret or a configuration fault naming the variable
    pub fn require(&self, name: &str) -> Result<&str, RelayError> {
        self.get(name)
            .ok_or_else(|| RelayError::Config(format!("Missing {} env var", name)))
    }
}

// Secrets never reach logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Credentials").field("names", &names).finish()
    }
}
