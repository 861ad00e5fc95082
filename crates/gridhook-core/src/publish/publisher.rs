//! EventPublisher trait definition.

use gridhook_types::cloud_event::CloudEvent;
use gridhook_types::error::PublishError;

/// Trait for event bus clients that accept translated cloud events.
///
/// Implementations live in gridhook-infra (e.g., `DispatchPublisher`).
/// A publisher is built once at startup and shared read-only by every
/// request, so `send` takes `&self`.
pub trait EventPublisher: Send + Sync {
    /// Human-readable publisher name, used in logs.
    fn name(&self) -> &str;

    /// Deliver one event. No retries are performed by callers.
    fn send(
        &self,
        event: &CloudEvent,
    ) -> impl std::future::Future<Output = Result<(), PublishError>> + Send;
}
