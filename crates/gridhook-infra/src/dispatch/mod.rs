//! Dispatch event gateway client.

pub mod client;

pub use client::{DispatchConfig, DispatchPublisher};
