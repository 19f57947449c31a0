/// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// Logs one line per request with a generated id, method, path, status
/// and duration
///
/// Bodies are never logged; they carry the submitter's personal data.
/// Handler logs emitted while the request runs inherit the `request` span.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let response = next.run(request).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    span.in_scope(|| {
        if response.status().is_success() {
            info!(status, duration_ms, "Request completed");
        } else {
            warn!(status, duration_ms, "Request failed");
        }
    });

    response
}
