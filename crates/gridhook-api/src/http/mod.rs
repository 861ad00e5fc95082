//! HTTP layer for gridhook.
//!
//! A single axum fallback handler receives every request, whatever the path
//! or method, and answers with bare status codes (plus the validation reply).

pub mod error;
pub mod handlers;
pub mod router;
