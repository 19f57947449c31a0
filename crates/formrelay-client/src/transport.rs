/// Submission transport - posts the form payload to the endpoint
use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::error::ClientError;
use async_trait::async_trait;
use formrelay_core::constants::SUBMIT_PATH;
use formrelay_core::models::{SubmissionRequest, SubmissionResponse};
use std::time::Duration;
use tracing::debug;
use url::Url;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Sends one submission
    ///
    /// `Ok` only for a 2xx answer with a readable body; any other status
    /// is `ClientError::Rejected` carrying the server's message if it sent
    /// one.
    async fn submit(&self, payload: &SubmissionRequest) -> Result<SubmissionResponse, ClientError>;
}

/// JSON-over-HTTP transport
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// `endpoint` is the full submission URL
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Transport for a site origin, posting to the standard submission path
    pub fn for_origin(origin: &str) -> Result<Self, ClientError> {
        let endpoint = Url::parse(origin)?.join(SUBMIT_PATH)?;
        Self::new(endpoint.as_str())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn submit(&self, payload: &SubmissionRequest) -> Result<SubmissionResponse, ClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), "Submission answered");

        let parsed = serde_json::from_slice::<SubmissionResponse>(&body);

        if status.is_success() {
            parsed.map_err(|e| ClientError::InvalidResponse(e.to_string()))
        } else {
            Err(ClientError::Rejected {
                status: status.as_u16(),
                message: parsed.ok().map(|r| r.message),
            })
        }
    }
}
