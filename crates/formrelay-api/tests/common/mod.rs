//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use formrelay_api::ApiContext;
use formrelay_core::ContactRelay;
use formrelay_core::RelayError;
use formrelay_core::models::{Credentials, DeliveryProvider, OutboundEmail, RelaySettings};
use formrelay_core::services::EmailSender;
use formrelay_core::services::config::StaticConfigProvider;
use http::{Request, Response};
use http_body_util::BodyExt;
use std::sync::{Arc, Mutex};

/// Sender that records every delivery instead of sending it
#[derive(Clone)]
pub struct RecordingSender {
    provider: DeliveryProvider,
    fail_with: Option<String>,
    pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl RecordingSender {
    pub fn new(provider: DeliveryProvider) -> Self {
        Self {
            provider,
            fail_with: None,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(provider: DeliveryProvider, reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::new(provider)
        }
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<OutboundEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    fn provider(&self) -> DeliveryProvider {
        self.provider
    }

    async fn send(
        &self,
        email: &OutboundEmail,
        _credentials: &Credentials,
    ) -> Result<String, RelayError> {
        if let Some(reason) = &self.fail_with {
            return Err(RelayError::Delivery(reason.clone()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(format!("test-{}", sent.len()))
    }
}

/// Context for a Resend deployment whose API key is present
pub fn configured_context(sender: &RecordingSender) -> Arc<ApiContext> {
    context_with_credentials(sender, &[("RESEND_API_KEY", "re_test_key")])
}

/// Context for a Resend deployment with no credentials at all
pub fn unconfigured_context(sender: &RecordingSender) -> Arc<ApiContext> {
    context_with_credentials(sender, &[])
}

pub fn context_with_credentials(
    sender: &RecordingSender,
    credentials: &[(&str, &str)],
) -> Arc<ApiContext> {
    let relay = ContactRelay::new(
        RelaySettings {
            provider: sender.provider(),
            ..RelaySettings::default()
        },
        Arc::new(StaticConfigProvider::new(credentials.iter().copied())),
        Arc::new(sender.clone()),
    );
    ApiContext::from_relay(relay)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Jo",
        "email": "jo@example.com",
        "subject": "Hi",
        "message": "Hello",
        "website": ""
    })
}
