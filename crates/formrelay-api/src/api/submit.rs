/// Contact-form submission endpoint
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use formrelay_core::RelayError;
use formrelay_core::models::{SubmissionRequest, SubmissionResponse};
use std::sync::Arc;
use tracing::warn;

use crate::{context::ApiContext, error::ApiError};

/// Relays one submission
///
/// The body is read as raw bytes so that a misconfigured deployment answers
/// with a configuration fault even when the payload is malformed. A body
/// that cannot be read (over the size limit, truncated) is an invalid body.
pub async fn handler(
    State(ctx): State<Arc<ApiContext>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let request = match parse_body(body) {
        Ok(request) => request,
        Err(e) => {
            ctx.relay.ensure_configured().await?;
            warn!(error = %e, "Rejected malformed submission body");
            return Err(e.into());
        }
    };

    let outcome = ctx.relay.relay(request).await.inspect_err(|e| {
        if e.is_input_fault() {
            warn!(error = %e, "Rejected submission");
        }
    })?;

    Ok(Json(SubmissionResponse::new(outcome.message())))
}

fn parse_body(body: Result<Bytes, BytesRejection>) -> Result<SubmissionRequest, RelayError> {
    let bytes = body.map_err(|e| RelayError::InvalidBody(e.body_text()))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Any method other than POST on the submission path
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
