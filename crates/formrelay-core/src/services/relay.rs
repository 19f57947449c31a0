/// Contact-form relay pipeline
///
/// Every step short-circuits; the order is part of the contract:
///
/// 1. delivery credentials present (configuration fault otherwise)
/// 2. required fields non-empty
/// 3. honeypot empty (filled means: report success, deliver nothing)
/// 4. email format
/// 5. optional MX check of the email domain
/// 6. payload construction (sanitized name, escaped HTML)
/// 7. delivery
use crate::constants::MSG_SUCCESS;
use crate::email::payload::build_outbound_email;
use crate::error::RelayError;
use crate::models::{Credentials, RelaySettings, Submission, SubmissionRequest};
use crate::services::config::{ConfigProvider, EnvConfigProvider};
use crate::services::dns::{DomainVerifier, HickoryDomainVerifier};
use crate::services::sender::{EmailSender, build_sender};
use crate::utils::logging::{email_domain_for_log, redact_subject};
use crate::utils::validation::{validate_email_address, validate_required_fields};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// Successful end of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Delivered { message_id: String },
    /// Honeypot was filled; nothing was sent
    Filtered,
}

impl RelayOutcome {
    /// Identical for both variants so filtering stays invisible to the sender
    pub fn message(&self) -> &'static str {
        MSG_SUCCESS
    }
}

pub struct ContactRelay {
    settings: RelaySettings,
    config: Arc<dyn ConfigProvider>,
    sender: Arc<dyn EmailSender>,
    verifier: Option<Arc<dyn DomainVerifier>>,
}

impl ContactRelay {
    pub fn new(
        settings: RelaySettings,
        config: Arc<dyn ConfigProvider>,
        sender: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            settings,
            config,
            sender,
            verifier: None,
        }
    }

    /// Enables the MX deliverability stage
    pub fn with_domain_verifier(mut self, verifier: Arc<dyn DomainVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Production wiring: environment credentials, the configured provider
    /// and, when enabled, the system DNS resolver
    pub async fn from_settings(settings: RelaySettings) -> Self {
        let sender = build_sender(&settings).await;
        let verify_domain = settings.verify_domain;
        let relay = Self::new(settings, Arc::new(EnvConfigProvider::new()), sender);

        if verify_domain {
            relay.with_domain_verifier(Arc::new(HickoryDomainVerifier::from_system_conf()))
        } else {
            relay
        }
    }

    pub fn settings(&self) -> &RelaySettings {
        &self.settings
    }

    /// Checks that the selected provider's credentials are present
    pub async fn ensure_configured(&self) -> Result<Credentials, RelayError> {
        self.config
            .credentials(self.sender.provider().required_credentials())
            .await
            .inspect_err(|e| error!(error = %e, "Delivery is not configured"))
    }

    #[tracing::instrument(
        name = "relay.submit",
        skip(self, request),
        fields(provider = %self.sender.provider())
    )]
    pub async fn relay(&self, request: SubmissionRequest) -> Result<RelayOutcome, RelayError> {
        let start_time = Instant::now();

        // 1. Configuration
        let credentials = self.ensure_configured().await?;

        // 2. Required fields
        let submission = Submission::from(request);
        validate_required_fields(&submission)?;

        // 3. Honeypot
        if submission.is_spam() {
            info!(
                email_domain = %email_domain_for_log(&submission.email),
                "Honeypot field filled, likely a bot"
            );
            return Ok(RelayOutcome::Filtered);
        }

        // 4. Format
        validate_email_address(&submission.email)?;

        // 5. Deliverability
        if let Some(verifier) = &self.verifier {
            self.verify_domain(verifier.as_ref(), &submission).await?;
        }

        // 6. Payload
        let email = build_outbound_email(&submission, &self.settings);

        // 7. Delivery
        let message_id = timeout(
            self.settings.delivery_timeout,
            self.sender.send(&email, &credentials),
        )
        .await
        .map_err(|_| {
            RelayError::Timeout(format!(
                "delivery exceeded {:?}",
                self.settings.delivery_timeout
            ))
        })
        .and_then(|result| result)
        .inspect_err(|e| error!(error = %e, "Failed to deliver contact message"))?;

        info!(
            message_id = %message_id,
            email_domain = %email_domain_for_log(&submission.email),
            subject = %redact_subject(&submission.subject),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Contact message delivered"
        );

        Ok(RelayOutcome::Delivered { message_id })
    }

    async fn verify_domain(
        &self,
        verifier: &dyn DomainVerifier,
        submission: &Submission,
    ) -> Result<(), RelayError> {
        let domain = submission.email_domain().ok_or_else(|| {
            RelayError::InvalidEmail(format!("No domain in {}", submission.email))
        })?;

        let has_mx = timeout(
            self.settings.lookup_timeout,
            verifier.has_mail_exchanger(domain),
        )
        .await
        .map_err(|_| {
            RelayError::Timeout(format!(
                "MX lookup for {} exceeded {:?}",
                domain, self.settings.lookup_timeout
            ))
        })
        .and_then(|result| result)?;

        if has_mx {
            Ok(())
        } else {
            warn!(email_domain = %domain, "Domain has no MX records");
            Err(RelayError::UndeliverableDomain(format!(
                "No MX records for {}",
                domain
            )))
        }
    }
}
