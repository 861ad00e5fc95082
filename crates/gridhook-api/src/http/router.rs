//! Axum router configuration with middleware.
//!
//! There are no explicit routes: the receiver is registered as the fallback so
//! that every path and method reaches it. Middleware: tracing, request timeout.

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the receiver router.
pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout;

    Router::new()
        .fallback(handlers::event_grid::receive_event)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
