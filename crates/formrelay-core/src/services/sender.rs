/// Delivery capability shared by all providers
use crate::error::RelayError;
use crate::models::{Credentials, DeliveryProvider, OutboundEmail, RelaySettings};
use crate::services::console::ConsoleEmailSender;
use crate::services::resend::ResendEmailSender;
use crate::services::ses::SesEmailSender;
use crate::services::smtp::SmtpEmailSender;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    fn provider(&self) -> DeliveryProvider;

    /// Transmits one email; returns the provider's message id
    async fn send(
        &self,
        email: &OutboundEmail,
        credentials: &Credentials,
    ) -> Result<String, RelayError>;
}

/// Builds the sender selected at deployment time
pub async fn build_sender(settings: &RelaySettings) -> Arc<dyn EmailSender> {
    match settings.provider {
        DeliveryProvider::Console => Arc::new(ConsoleEmailSender::new()),
        DeliveryProvider::Smtp => Arc::new(SmtpEmailSender::new()),
        DeliveryProvider::Ses => {
            let aws_config = aws_config::load_from_env().await;
            Arc::new(SesEmailSender::new(aws_sdk_ses::Client::new(&aws_config)))
        }
        DeliveryProvider::Resend => Arc::new(ResendEmailSender::new(&settings.resend_api_url)),
    }
}
