//! Cloud event forwarding.
//!
//! Decodes a structured cloud event body and hands it to the configured
//! [`BoxEventPublisher`]. With no publisher (dry run) the event is logged and
//! dropped. Send failures are handled according to the [`DeliveryPolicy`].

use gridhook_types::cloud_event::CloudEvent;
use gridhook_types::delivery::DeliveryPolicy;
use gridhook_types::error::{ForwardError, PublishError};

use crate::publish::BoxEventPublisher;

/// What happened to a decoded event.
#[derive(Debug)]
pub enum ForwardOutcome {
    /// The publisher accepted the event.
    Delivered,
    /// Dry run: no publisher configured, nothing was sent.
    Skipped,
    /// The send failed and the best-effort policy swallowed the error.
    Dropped(PublishError),
}

/// Forwards decoded cloud events to the event bus.
pub struct EventForwarder {
    publisher: Option<BoxEventPublisher>,
    policy: DeliveryPolicy,
}

impl EventForwarder {
    /// Create a forwarder. `None` disables outbound delivery (dry run).
    pub fn new(publisher: Option<BoxEventPublisher>, policy: DeliveryPolicy) -> Self {
        Self { publisher, policy }
    }

    /// Whether an outbound publisher is configured.
    pub fn is_dry_run(&self) -> bool {
        self.publisher.is_none()
    }

    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// Decode `body` as a cloud event and send it at most once.
    ///
    /// Decode failures are always errors and never reach the publisher. A
    /// send failure is an error only under [`DeliveryPolicy::FailRequest`].
    pub async fn forward(&self, body: &[u8]) -> Result<ForwardOutcome, ForwardError> {
        let event: CloudEvent = serde_json::from_slice(body).map_err(|e| {
            tracing::error!(error = %e, "failed to decode cloud event");
            ForwardError::Decode(e.to_string())
        })?;

        let Some(publisher) = &self.publisher else {
            tracing::info!(
                event_id = %event.event_id,
                event_type = %event.event_type,
                source = %event.source,
                "dry run, not sending event"
            );
            return Ok(ForwardOutcome::Skipped);
        };

        match publisher.send(&event).await {
            Ok(()) => {
                tracing::info!(
                    event_id = %event.event_id,
                    event_type = %event.event_type,
                    source = %event.source,
                    publisher = publisher.name(),
                    "sent event"
                );
                Ok(ForwardOutcome::Delivered)
            }
            Err(e) => {
                tracing::error!(
                    event_id = %event.event_id,
                    event_type = %event.event_type,
                    publisher = publisher.name(),
                    error = %e,
                    "failed to send event"
                );
                match self.policy {
                    DeliveryPolicy::BestEffort => Ok(ForwardOutcome::Dropped(e)),
                    DeliveryPolicy::FailRequest => Err(ForwardError::Delivery(e)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::publish::EventPublisher;

    use super::*;

    #[derive(Clone, Default)]
    struct RecordingPublisher {
        sent: Arc<Mutex<Vec<CloudEvent>>>,
        fail: bool,
    }

    impl EventPublisher for RecordingPublisher {
        fn name(&self) -> &str {
            "recording"
        }

        async fn send(&self, event: &CloudEvent) -> Result<(), PublishError> {
            self.sent.lock().unwrap().push(event.clone());
            if self.fail {
                Err(PublishError::Transport("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    const EVENT: &[u8] = br#"{
        "eventType": "Microsoft.Storage.BlobCreated",
        "cloudEventsVersion": "0.1",
        "source": "/storage/account",
        "eventID": "evt-1",
        "data": {"url": "https://example/blob"}
    }"#;

    fn forwarder(publisher: &RecordingPublisher, policy: DeliveryPolicy) -> EventForwarder {
        EventForwarder::new(Some(BoxEventPublisher::new(publisher.clone())), policy)
    }

    #[tokio::test]
    async fn test_forward_sends_exactly_once() {
        let publisher = RecordingPublisher::default();
        let fwd = forwarder(&publisher, DeliveryPolicy::BestEffort);

        let outcome = fwd.forward(EVENT).await.unwrap();

        assert!(matches!(outcome, ForwardOutcome::Delivered));
        let sent = publisher.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].event_id, "evt-1");
    }

    #[tokio::test]
    async fn test_decode_failure_never_sends() {
        let publisher = RecordingPublisher::default();
        let fwd = forwarder(&publisher, DeliveryPolicy::BestEffort);

        let err = fwd.forward(b"{not json").await.unwrap_err();

        assert!(matches!(err, ForwardError::Decode(_)));
        assert!(publisher.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_best_effort_swallows_send_failure() {
        let publisher = RecordingPublisher {
            fail: true,
            ..Default::default()
        };
        let fwd = forwarder(&publisher, DeliveryPolicy::BestEffort);

        let outcome = fwd.forward(EVENT).await.unwrap();

        assert!(matches!(outcome, ForwardOutcome::Dropped(PublishError::Transport(_))));
        assert_eq!(publisher.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fail_request_surfaces_send_failure() {
        let publisher = RecordingPublisher {
            fail: true,
            ..Default::default()
        };
        let fwd = forwarder(&publisher, DeliveryPolicy::FailRequest);

        let err = fwd.forward(EVENT).await.unwrap_err();

        assert!(matches!(err, ForwardError::Delivery(_)));
        assert_eq!(publisher.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dry_run_skips_send() {
        let fwd = EventForwarder::new(None, DeliveryPolicy::FailRequest);
        assert!(fwd.is_dry_run());

        let outcome = fwd.forward(EVENT).await.unwrap();
        assert!(matches!(outcome, ForwardOutcome::Skipped));
    }

    #[tokio::test]
    async fn test_dry_run_still_rejects_malformed_body() {
        let fwd = EventForwarder::new(None, DeliveryPolicy::BestEffort);
        assert!(matches!(
            fwd.forward(b"\"just a string\"").await,
            Err(ForwardError::Decode(_))
        ));
    }
}
