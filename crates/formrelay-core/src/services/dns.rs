/// Mail-exchanger verification for submitter domains
use crate::error::RelayError;
use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainVerifier: Send + Sync {
    /// Whether the domain publishes at least one MX record
    async fn has_mail_exchanger(&self, domain: &str) -> Result<bool, RelayError>;
}

pub struct HickoryDomainVerifier {
    resolver: TokioAsyncResolver,
}

impl HickoryDomainVerifier {
    /// Uses the system resolver configuration, falling back to the
    /// library defaults when none can be read (e.g. in minimal containers)
    pub fn from_system_conf() -> Self {
        let resolver = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "No system resolver configuration, using defaults");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        });
        Self { resolver }
    }

    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DomainVerifier for HickoryDomainVerifier {
    async fn has_mail_exchanger(&self, domain: &str) -> Result<bool, RelayError> {
        // Fully qualified, so search domains are never appended
        let fqdn = format!("{}.", domain.trim_end_matches('.'));

        match self.resolver.mx_lookup(fqdn).await {
            Ok(lookup) => {
                let count = lookup.iter().count();
                tracing::debug!(domain = %domain, records = count, "MX lookup finished");
                Ok(count > 0)
            }
            Err(e) => lookup_failure(domain, &e),
        }
    }
}

/// An empty answer means no mail exchanger; anything else is a failed lookup
fn lookup_failure(domain: &str, e: &ResolveError) -> Result<bool, RelayError> {
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => Ok(false),
        _ => Err(RelayError::UndeliverableDomain(format!(
            "MX lookup for {} failed: {}",
            domain, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_verifier_contract() {
        let mut verifier = MockDomainVerifier::new();
        verifier
            .expect_has_mail_exchanger()
            .withf(|domain| domain == "example.com")
            .returning(|_| Ok(true));

        assert!(verifier.has_mail_exchanger("example.com").await.unwrap());
    }

    #[test]
    fn test_resolver_failure_is_undeliverable() {
        let err = lookup_failure("example.com", &ResolveError::from("no connections available"))
            .unwrap_err();
        match err {
            RelayError::UndeliverableDomain(msg) => assert!(msg.contains("example.com")),
            other => panic!("expected undeliverable domain, got {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_resolves_real_domain() {
        let verifier = HickoryDomainVerifier::from_system_conf();
        assert!(verifier.has_mail_exchanger("gmail.com").await.unwrap());
    }
}
