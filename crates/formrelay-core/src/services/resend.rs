/// Resend transactional-email API delivery
use crate::constants::ENV_RESEND_API_KEY;
use crate::error::RelayError;
use crate::models::{Credentials, DeliveryProvider, OutboundEmail};
use crate::services::sender::EmailSender;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub struct ResendEmailSender {
    client: reqwest::Client,
    endpoint: String,
}

impl ResendEmailSender {
    /// `base_url` is the API root, e.g. `https://api.resend.com`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
        }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    fn provider(&self) -> DeliveryProvider {
        DeliveryProvider::Resend
    }

    async fn send(
        &self,
        email: &OutboundEmail,
        credentials: &Credentials,
    ) -> Result<String, RelayError> {
        let api_key = credentials.require(ENV_RESEND_API_KEY)?;

        let request = SendEmailRequest {
            from: email.from.to_string(),
            to: [email.to.address.as_str()],
            reply_to: &email.reply_to.address,
            subject: &email.subject,
            text: &email.body.text,
            html: &email.body.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Delivery(format!("Resend request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Delivery(format!(
                "Resend rejected email ({}): {}",
                status, body
            )));
        }

        let SendEmailResponse { id } = response
            .json()
            .await
            .map_err(|e| RelayError::Delivery(format!("Invalid Resend response: {}", e)))?;

        tracing::info!(message_id = %id, "Sent email via Resend");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmailAddress, EmailBody};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: EmailAddress::with_name("no-reply@example.com", "Jo"),
            to: EmailAddress::new("hello@example.com"),
            reply_to: EmailAddress::new("jo@example.com"),
            subject: "[Contact Form] Hi".into(),
            body: EmailBody {
                text: "Hello".into(),
                html: "<p>Hello</p>".into(),
            },
        }
    }

    fn credentials() -> Credentials {
        let mut credentials = Credentials::new();
        credentials.insert(ENV_RESEND_API_KEY, "re_test_key");
        credentials
    }

    #[tokio::test]
    async fn test_send_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test_key"))
            .and(body_partial_json(json!({
                "from": "Jo <no-reply@example.com>",
                "to": ["hello@example.com"],
                "reply_to": "jo@example.com",
                "subject": "[Contact Form] Hi",
                "text": "Hello",
                "html": "<p>Hello</p>"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "email_123" })))
            .expect(1)
            .mount(&server)
            .await;

        let sender = ResendEmailSender::new(&server.uri());
        let id = sender.send(&email(), &credentials()).await.unwrap();

        assert_eq!(id, "email_123");
    }

    #[tokio::test]
    async fn test_api_rejection_is_delivery_fault() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({ "message": "invalid from" })),
            )
            .mount(&server)
            .await;

        let sender = ResendEmailSender::new(&format!("{}/", server.uri()));
        let err = sender.send(&email(), &credentials()).await.unwrap_err();

        match err {
            RelayError::Delivery(msg) => assert!(msg.contains("422")),
            other => panic!("expected delivery error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let sender = ResendEmailSender::new("http://127.0.0.1:9");
        let result = sender.send(&email(), &Credentials::new()).await;
        assert!(matches!(result, Err(RelayError::Config(_))));
    }
}
