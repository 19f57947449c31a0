/// Formrelay API - contact-form submission endpoint Lambda
///
/// This module contains the HTTP surface of the relay: routing, error
/// mapping and request logging around `formrelay_core::ContactRelay`.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    body::Body as AxumBody,
    extract::DefaultBodyLimit,
    http::{Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use formrelay_core::constants::{HEALTH_PATH, MAX_BODY_BYTES, SUBMIT_PATH};
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Builds the endpoint router
pub fn router(ctx: Arc<ApiContext>) -> Router {
    Router::new()
        .route(
            SUBMIT_PATH,
            post(api::submit::handler).fallback(api::submit::method_not_allowed),
        )
        .route(HEALTH_PATH, get(api::health::handler))
        // Add request logging middleware
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // The form is posted from the static site's origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(ctx)
}

/// Main API handler - converts Lambda HTTP request to Axum router
pub async fn handler(ctx: Arc<ApiContext>, event: Request) -> Result<Response<Body>, LambdaError> {
    info!("Processing API request: {} {}", event.method(), event.uri().path());

    let app = router(ctx);

    // Convert Lambda HTTP request to Axum request
    let (parts, body) = event.into_parts();
    let axum_request = http::Request::from_parts(parts, AxumBody::from(body.to_vec()));

    // Process request with Axum; the router itself is infallible
    let response = app.oneshot(axum_request).await?;

    // Convert Axum response body to Lambda response body
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await?;

    Ok(Response::from_parts(parts, Body::from(body_bytes.to_vec())))
}
