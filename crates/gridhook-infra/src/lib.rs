//! Infrastructure layer for gridhook.
//!
//! Contains the implementation of the `EventPublisher` port defined in
//! `gridhook-core` (an HTTP client for the Dispatch event gateway) and the
//! environment lookup for its credentials.

pub mod credentials;
pub mod dispatch;
