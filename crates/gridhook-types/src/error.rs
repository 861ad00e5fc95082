use thiserror::Error;

/// Errors from classifying an inbound request.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("missing content-type header")]
    MissingContentType,

    #[error("invalid media type '{0}'")]
    InvalidMediaType(String),
}

/// Errors from the subscription validation handshake.
#[derive(Debug, Error)]
pub enum HandshakeError {
    #[error("malformed validation payload: {0}")]
    Malformed(String),

    #[error("expected exactly one validation event, got {0}")]
    Cardinality(usize),

    #[error("failed to encode validation response: {0}")]
    Encode(String),
}

/// A cloud event missing attributes the event bus requires.
#[derive(Debug, Error)]
pub enum InvalidEventError {
    #[error("missing required attribute '{0}'")]
    MissingAttribute(&'static str),

    #[error("eventType is {len} characters, max {max}")]
    EventTypeTooLong { len: usize, max: usize },
}

/// Errors from delivering an event to the event bus.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("invalid cloud event: {0}")]
    InvalidEvent(#[from] InvalidEventError),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("event bus rejected event with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("client configuration error: {0}")]
    Configuration(String),
}

/// Errors from forwarding a cloud event.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("malformed cloud event: {0}")]
    Decode(String),

    #[error("delivery failed: {0}")]
    Delivery(#[from] PublishError),
}
