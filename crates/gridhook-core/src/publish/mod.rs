//! Outbound event publishing abstractions.
//!
//! - `EventPublisher`: RPITIT trait for concrete event bus clients
//! - `BoxEventPublisher`: object-safe wrapper for dynamic dispatch

pub mod box_publisher;
pub mod publisher;

pub use box_publisher::BoxEventPublisher;
pub use publisher::EventPublisher;
