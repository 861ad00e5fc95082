//! Shared domain types for gridhook.
//!
//! This crate contains the wire types exchanged with Event Grid (validation
//! handshake payloads and cloud event envelopes), the delivery policy, and
//! the error types used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod cloud_event;
pub mod delivery;
pub mod error;
pub mod nullable;
pub mod validation;
