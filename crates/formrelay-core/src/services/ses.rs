/// SES email sending service
use crate::email::composer::compose_raw;
use crate::error::RelayError;
use crate::models::{Credentials, DeliveryProvider, OutboundEmail};
use crate::services::sender::EmailSender;
use async_trait::async_trait;
use aws_sdk_ses::primitives::Blob;
use aws_sdk_ses::types::RawMessage;

/// Sends raw MIME composed by lettre through `SendRawEmail`
///
/// AWS credentials are resolved by the SDK's own provider chain; the
/// relay only checks that they are present.
pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    fn provider(&self) -> DeliveryProvider {
        DeliveryProvider::Ses
    }

    async fn send(
        &self,
        email: &OutboundEmail,
        _credentials: &Credentials,
    ) -> Result<String, RelayError> {
        let raw_email = compose_raw(email)?;

        let raw_message = RawMessage::builder()
            .data(Blob::new(raw_email))
            .build()
            .map_err(|e| RelayError::Delivery(format!("Failed to build raw message: {}", e)))?;

        let response = self
            .client
            .send_raw_email()
            .raw_message(raw_message)
            .source(email.from.address.clone())
            .destinations(email.to.address.clone())
            .send()
            .await
            .map_err(|e| RelayError::Delivery(format!("SES send_raw_email failed: {}", e)))?;

        let message_id = response.message_id;

        tracing::info!(message_id = %message_id, "Sent email via SES");
        Ok(message_id)
    }
}
