//! Event Grid receiver handler.
//!
//! Classifies every inbound request once, then either completes the
//! subscription validation handshake, forwards a cloud event, or
//! acknowledges and ignores the request.

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use gridhook_core::classify::{classify, RouteDecision, EVENT_TYPE_HEADER};
use gridhook_core::forward::ForwardOutcome;
use gridhook_core::handshake;
use gridhook_types::error::ClassifyError;

use crate::http::error::AppError;
use crate::state::AppState;

/// ANY /* - Receive an Event Grid delivery.
///
/// - `application/json` + `aeg-event-type: SubscriptionValidation`: echo the
///   validation code as `{"validationResponse": ...}`.
/// - `application/cloudevents+json`: decode and forward the event; 200 even
///   if the send fails under the best-effort policy.
/// - Anything else: 200 with an empty body.
pub async fn receive_event(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let request_id = Uuid::now_v7();
    let (parts, body) = request.into_parts();

    let route = classify(
        content_type(&parts.headers)?,
        header_str(&parts.headers, EVENT_TYPE_HEADER),
    )?;

    tracing::debug!(
        request_id = %request_id,
        method = %parts.method,
        uri = %parts.uri,
        route = ?route,
        "classified request"
    );

    match route {
        RouteDecision::Validation => {
            let body = read_body(body, state.config.max_body_bytes).await?;
            let response = handshake::validate_subscription(&body)?;
            let payload = handshake::encode_response(&response)?;
            Ok((StatusCode::OK, [(CONTENT_TYPE, "application/json")], payload).into_response())
        }
        RouteDecision::CloudEvent => {
            let body = read_body(body, state.config.max_body_bytes).await?;
            let outcome = state.forwarder.forward(&body).await?;
            tracing::debug!(request_id = %request_id, outcome = ?outcome, "cloud event handled");
            if let ForwardOutcome::Dropped(_) = outcome {
                tracing::warn!(request_id = %request_id, "acknowledging undelivered event");
            }
            Ok(StatusCode::OK.into_response())
        }
        RouteDecision::Ignored => Ok(StatusCode::OK.into_response()),
    }
}

/// The `Content-Type` value, if present. A value that is not visible ASCII
/// cannot be a media type.
fn content_type(headers: &HeaderMap) -> Result<Option<&str>, ClassifyError> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return Ok(None);
    };
    value.to_str().map(Some).map_err(|_| {
        ClassifyError::InvalidMediaType(String::from_utf8_lossy(value.as_bytes()).into_owned())
    })
}

/// Header value as text; non-visible-ASCII values count as absent.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Read the whole body, failing if it exceeds `limit` bytes.
async fn read_body(body: Body, limit: usize) -> Result<Bytes, AppError> {
    to_bytes(body, limit)
        .await
        .map_err(|e| AppError::BodyRead(e.to_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_content_type_absent() {
        assert_eq!(content_type(&HeaderMap::new()).unwrap(), None);
    }

    #[test]
    fn test_content_type_present() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert_eq!(content_type(&headers).unwrap(), Some("application/json"));
    }

    #[test]
    fn test_non_ascii_content_type_is_invalid_not_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_bytes(b"application/json\xff").unwrap(),
        );
        assert!(matches!(
            content_type(&headers),
            Err(ClassifyError::InvalidMediaType(_))
        ));
    }
}
