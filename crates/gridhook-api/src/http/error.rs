//! Application error type mapping to bare HTTP status codes.
//!
//! Event Grid only looks at the status, so no error body is written.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gridhook_types::error::{ClassifyError, ForwardError, HandshakeError};

/// Request-level failure.
#[derive(Debug)]
pub enum AppError {
    /// Content-Type missing or not a media type.
    Classify(ClassifyError),
    /// Validation handshake failure.
    Handshake(HandshakeError),
    /// Cloud event forwarding failure.
    Forward(ForwardError),
    /// The request body could not be read (I/O error or over the size limit).
    BodyRead(String),
}

impl From<ClassifyError> for AppError {
    fn from(e: ClassifyError) -> Self {
        AppError::Classify(e)
    }
}

impl From<HandshakeError> for AppError {
    fn from(e: HandshakeError) -> Self {
        AppError::Handshake(e)
    }
}

impl From<ForwardError> for AppError {
    fn from(e: ForwardError) -> Self {
        AppError::Forward(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Classify(_) => StatusCode::BAD_REQUEST,
            AppError::Handshake(HandshakeError::Malformed(_))
            | AppError::Handshake(HandshakeError::Cardinality(_)) => StatusCode::BAD_REQUEST,
            AppError::Handshake(HandshakeError::Encode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Forward(ForwardError::Decode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Forward(ForwardError::Delivery(_)) => StatusCode::BAD_GATEWAY,
            AppError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Classify(e) => tracing::debug!(error = %e, "rejecting request"),
            AppError::Handshake(e) => tracing::debug!(error = %e, "rejecting validation request"),
            // Already logged by the forwarder.
            AppError::Forward(_) => {}
            AppError::BodyRead(msg) => tracing::warn!(error = %msg, "failed to read request body"),
        }
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use gridhook_types::error::PublishError;

    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Classify(ClassifyError::MissingContentType), StatusCode::BAD_REQUEST),
            (AppError::Handshake(HandshakeError::Cardinality(2)), StatusCode::BAD_REQUEST),
            (
                AppError::Handshake(HandshakeError::Malformed("eof".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Handshake(HandshakeError::Encode("io".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Forward(ForwardError::Decode("eof".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Forward(ForwardError::Delivery(PublishError::Transport(
                    "refused".to_string(),
                ))),
                StatusCode::BAD_GATEWAY,
            ),
            (AppError::BodyRead("reset".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err:?}");
        }
    }

    #[test]
    fn test_error_response_has_empty_body() {
        let resp = AppError::Classify(ClassifyError::MissingContentType).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().get(axum::http::header::CONTENT_TYPE).is_none());
    }
}
