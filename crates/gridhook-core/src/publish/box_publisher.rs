//! BoxEventPublisher -- object-safe dynamic dispatch wrapper for EventPublisher.
//!
//! 1. Define an object-safe `EventPublisherDyn` trait with boxed futures
//! 2. Blanket-impl `EventPublisherDyn` for all `T: EventPublisher`
//! 3. `BoxEventPublisher` wraps `Box<dyn EventPublisherDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use gridhook_types::cloud_event::CloudEvent;
use gridhook_types::error::PublishError;

use super::publisher::EventPublisher;

/// Object-safe version of [`EventPublisher`] with boxed futures.
pub trait EventPublisherDyn: Send + Sync {
    fn name(&self) -> &str;

    fn send_boxed<'a>(
        &'a self,
        event: &'a CloudEvent,
    ) -> Pin<Box<dyn Future<Output = Result<(), PublishError>> + Send + 'a>>;
}

impl<T: EventPublisher> EventPublisherDyn for T {
    fn name(&self) -> &str {
        EventPublisher::name(self)
    }

    fn send_boxed<'a>(
        &'a self,
        event: &'a CloudEvent,
    ) -> Pin<Box<dyn Future<Output = Result<(), PublishError>> + Send + 'a>> {
        Box::pin(self.send(event))
    }
}

/// Type-erased event publisher chosen at startup.
///
/// Since `EventPublisher` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxEventPublisher` provides the same methods and delegates to
/// the inner `EventPublisherDyn` trait object.
pub struct BoxEventPublisher {
    inner: Box<dyn EventPublisherDyn + Send + Sync>,
}

impl BoxEventPublisher {
    /// Wrap a concrete `EventPublisher` in a type-erased box.
    pub fn new<T: EventPublisher + 'static>(publisher: T) -> Self {
        Self {
            inner: Box::new(publisher),
        }
    }

    /// Human-readable publisher name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Deliver one event.
    pub async fn send(&self, event: &CloudEvent) -> Result<(), PublishError> {
        self.inner.send_boxed(event).await
    }
}
