/// Health check endpoint
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::context::ApiContext;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub provider: String,
}

/// Health check handler
///
/// Reports the deployment's delivery provider; it does not contact it.
pub async fn handler(State(ctx): State<Arc<ApiContext>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: formrelay_core::VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        provider: ctx.relay.settings().provider.to_string(),
    })
}
