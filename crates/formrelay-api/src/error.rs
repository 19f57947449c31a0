/// API Error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formrelay_core::RelayError;
use formrelay_core::constants::MSG_METHOD_NOT_ALLOWED;
use formrelay_core::models::SubmissionResponse;

/// API Error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Relay(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => MSG_METHOD_NOT_ALLOWED,
            ApiError::Relay(err) => err.public_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(SubmissionResponse::new(self.message()));
        (self.status(), body).into_response()
    }
}
