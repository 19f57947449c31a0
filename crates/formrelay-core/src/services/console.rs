/// Console delivery - logs the submission instead of sending it
use crate::error::RelayError;
use crate::models::{Credentials, DeliveryProvider, OutboundEmail};
use crate::services::sender::EmailSender;
use crate::utils::logging::{redact_body, redact_email, redact_subject};
use async_trait::async_trait;
use tracing::info;

#[derive(Debug, Default, Clone)]
pub struct ConsoleEmailSender;

impl ConsoleEmailSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for ConsoleEmailSender {
    fn provider(&self) -> DeliveryProvider {
        DeliveryProvider::Console
    }

    async fn send(
        &self,
        email: &OutboundEmail,
        _credentials: &Credentials,
    ) -> Result<String, RelayError> {
        let message_id = uuid::Uuid::new_v4().to_string();

        info!(
            message_id = %message_id,
            from_name = email.from.name.as_deref().unwrap_or_default(),
            reply_to = %redact_email(&email.reply_to.address),
            subject = %redact_subject(&email.subject),
            body = %redact_body(&email.body.text),
            "New form submission"
        );

        Ok(message_id)
    }
}
