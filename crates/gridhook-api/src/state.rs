//! Application state shared by every request handler.
//!
//! Built once before the listener starts and never mutated afterwards, so
//! handlers read it concurrently without locks.

use std::sync::Arc;

use gridhook_core::forward::EventForwarder;
use gridhook_core::publish::BoxEventPublisher;
use gridhook_infra::credentials::{token_from_env, AUTH_TOKEN_ENV};
use gridhook_infra::dispatch::{DispatchConfig, DispatchPublisher};

use crate::config::ServeConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServeConfig>,
    pub forwarder: Arc<EventForwarder>,
}

impl AppState {
    /// Wire the event gateway client from `config`.
    ///
    /// In dry-run mode no client is constructed at all.
    pub fn init(config: ServeConfig) -> anyhow::Result<Self> {
        let publisher = if config.dry_run {
            tracing::warn!("dry run enabled, events will be decoded but not sent");
            None
        } else {
            let dispatch = DispatchPublisher::new(DispatchConfig {
                endpoint: config.dispatch_endpoint.clone(),
                org: config.org.clone(),
                token: token_from_env(AUTH_TOKEN_ENV),
                timeout: config.send_timeout,
            })?;
            Some(BoxEventPublisher::new(dispatch))
        };

        tracing::info!(
            org = %config.org,
            delivery_policy = %config.delivery_policy,
            shared_secret_configured = config.shared_secret.is_some(),
            "event driver initialized"
        );

        Ok(Self::new(config, publisher))
    }

    /// Assemble state around an already-built publisher.
    pub fn new(config: ServeConfig, publisher: Option<BoxEventPublisher>) -> Self {
        let forwarder = EventForwarder::new(publisher, config.delivery_policy);
        Self {
            config: Arc::new(config),
            forwarder: Arc::new(forwarder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_builds_no_publisher() {
        let state = AppState::init(ServeConfig {
            dry_run: true,
            ..Default::default()
        })
        .unwrap();
        assert!(state.forwarder.is_dry_run());
    }

    #[test]
    fn test_init_builds_publisher() {
        let state = AppState::init(ServeConfig::default()).unwrap();
        assert!(!state.forwarder.is_dry_run());
        assert_eq!(state.forwarder.policy(), state.config.delivery_policy);
    }
}
