//! Inbound request classification.
//!
//! Every request is reduced to a single [`RouteDecision`] from two header
//! signals: the essence of `Content-Type` (parameters discarded) and the
//! `aeg-event-type` header set by Event Grid.

use gridhook_types::error::ClassifyError;

/// Header Event Grid uses to name the delivery kind.
pub const EVENT_TYPE_HEADER: &str = "aeg-event-type";

/// `aeg-event-type` value announcing a subscription validation handshake.
pub const SUBSCRIPTION_VALIDATION: &str = "SubscriptionValidation";

/// Media type of a validation handshake body.
pub const VALIDATION_MEDIA_TYPE: &str = "application/json";

/// Media type of a structured cloud event body.
pub const CLOUD_EVENT_MEDIA_TYPE: &str = "application/cloudevents+json";

/// Which protocol path handles a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Subscription validation handshake.
    Validation,
    /// Data-carrying cloud event to forward.
    CloudEvent,
    /// Anything else. Acknowledged and dropped.
    Ignored,
}

/// Decide how to handle a request from its header values.
///
/// A missing or unparseable `Content-Type` is an error; the caller answers it
/// with 400 and does no further work.
pub fn classify(
    content_type: Option<&str>,
    event_kind: Option<&str>,
) -> Result<RouteDecision, ClassifyError> {
    let raw = content_type.ok_or(ClassifyError::MissingContentType)?;
    let media_type = parse_media_type(raw)
        .ok_or_else(|| ClassifyError::InvalidMediaType(raw.to_string()))?;
    let essence = media_type.essence_str();

    if essence.eq_ignore_ascii_case(VALIDATION_MEDIA_TYPE)
        && event_kind == Some(SUBSCRIPTION_VALIDATION)
    {
        Ok(RouteDecision::Validation)
    } else if essence.eq_ignore_ascii_case(CLOUD_EVENT_MEDIA_TYPE) {
        Ok(RouteDecision::CloudEvent)
    } else {
        Ok(RouteDecision::Ignored)
    }
}

/// Parse a `Content-Type` value, allowing whitespace before the first `;`.
fn parse_media_type(raw: &str) -> Option<mime::Mime> {
    let raw = raw.trim();
    let normalized = match raw.split_once(';') {
        Some((essence, params)) => format!("{};{params}", essence.trim_end()),
        None => raw.to_string(),
    };
    normalized.parse().ok()
}
