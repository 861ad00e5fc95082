//! Observability setup for gridhook: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
