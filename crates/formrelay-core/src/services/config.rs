/// Configuration service - reads delivery credentials from the environment
use crate::error::RelayError;
use crate::models::Credentials;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Returns the named credentials, failing if any of them is absent
    async fn credentials(&self, names: &[&str]) -> Result<Credentials, RelayError>;
}

/// Environment variable-based configuration provider
///
/// Variables are read on every call, so a deployment that is missing a
/// secret reports a configuration fault per request instead of failing to
/// start.
#[derive(Debug, Default, Clone)]
pub struct EnvConfigProvider;

impl EnvConfigProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConfigProvider for EnvConfigProvider {
    async fn credentials(&self, names: &[&str]) -> Result<Credentials, RelayError> {
        collect(names, |name| std::env::var(name).ok())
    }
}

/// Fixed credential map, for tests and local runs
#[derive(Debug, Default, Clone)]
pub struct StaticConfigProvider {
    values: HashMap<String, String>,
}

impl StaticConfigProvider {
    pub fn new<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigProvider for StaticConfigProvider {
    async fn credentials(&self, names: &[&str]) -> Result<Credentials, RelayError> {
        collect(names, |name| self.values.get(name).cloned())
    }
}

fn collect<F>(names: &[&str], lookup: F) -> Result<Credentials, RelayError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut credentials = Credentials::new();
    let mut missing = Vec::new();

    for name in names {
        match lookup(name).filter(|value| !value.is_empty()) {
            Some(value) => credentials.insert(*name, value),
            None => missing.push(*name),
        }
    }

    if missing.is_empty() {
        Ok(credentials)
    } else {
        Err(RelayError::Config(format!(
            "Missing {} env var(s)",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_requested_credentials() {
        let provider = StaticConfigProvider::new([("SMTP_URL", "smtp://localhost"), ("OTHER", "x")]);

        let credentials = provider.credentials(&["SMTP_URL"]).await.unwrap();
        assert_eq!(credentials.get("SMTP_URL"), Some("smtp://localhost"));
        assert_eq!(credentials.get("OTHER"), None);
    }

    #[tokio::test]
    async fn test_missing_credentials_are_config_faults() {
        let provider = StaticConfigProvider::new([("RESEND_API_KEY", "")]);

        let err = provider
            .credentials(&["RESEND_API_KEY", "SMTP_URL"])
            .await
            .unwrap_err();
        match err {
            RelayError::Config(msg) => {
                assert!(msg.contains("RESEND_API_KEY"));
                assert!(msg.contains("SMTP_URL"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_required_credentials() {
        let provider = StaticConfigProvider::empty();
        assert!(provider.credentials(&[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_env_provider_reports_absent_variable() {
        let provider = EnvConfigProvider::new();
        let result = provider
            .credentials(&["FORMRELAY_TEST_SURELY_UNSET_VARIABLE"])
            .await;
        assert!(matches!(result, Err(RelayError::Config(_))));
    }
}
