//! Protocol logic for gridhook.
//!
//! This crate decides what an inbound Event Grid request is, completes the
//! subscription validation handshake, and forwards cloud events through the
//! [`publish::EventPublisher`] port. It depends only on `gridhook-types` --
//! never on `gridhook-infra` or any HTTP crate.

pub mod classify;
pub mod forward;
pub mod handshake;
pub mod publish;
