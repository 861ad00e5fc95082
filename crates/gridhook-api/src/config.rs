//! Immutable serve configuration, built once from the CLI.

use std::time::Duration;

use secrecy::SecretString;

use gridhook_types::delivery::DeliveryPolicy;

use crate::cli::Cli;

pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DISPATCH_ENDPOINT: &str = "localhost:8080";
pub const DEFAULT_ORG: &str = "default";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 10;

/// Settings shared read-only by every request.
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
    pub dispatch_endpoint: String,
    pub org: String,
    /// Not checked by the receive path.
    pub shared_secret: Option<SecretString>,
    pub dry_run: bool,
    pub delivery_policy: DeliveryPolicy,
    pub max_body_bytes: usize,
    pub request_timeout: Duration,
    pub send_timeout: Duration,
}

impl ServeConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            port: cli.port,
            dispatch_endpoint: cli.dispatch_api_endpoint.clone(),
            org: cli.org.clone(),
            shared_secret: cli
                .shared_secret
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| SecretString::from(s.to_string())),
            dry_run: cli.dry_run,
            delivery_policy: cli.delivery_policy,
            max_body_bytes: cli.max_body_bytes,
            request_timeout: Duration::from_secs(cli.request_timeout_secs),
            send_timeout: Duration::from_secs(cli.send_timeout_secs),
        }
    }

    /// `host:port` to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dispatch_endpoint: DEFAULT_DISPATCH_ENDPOINT.to_string(),
            org: DEFAULT_ORG.to_string(),
            shared_secret: None,
            dry_run: false,
            delivery_policy: DeliveryPolicy::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            send_timeout: Duration::from_secs(DEFAULT_SEND_TIMEOUT_SECS),
        }
    }
}
