//! DispatchPublisher -- concrete [`EventPublisher`] for the Dispatch event gateway.
//!
//! POSTs each cloud event as `application/cloudevents+json` to the gateway
//! root, tagged with the organization header and, when configured, a bearer
//! token. The token is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};

use gridhook_core::classify::CLOUD_EVENT_MEDIA_TYPE;
use gridhook_core::publish::EventPublisher;
use gridhook_types::cloud_event::CloudEvent;
use gridhook_types::error::PublishError;

/// Header naming the organization an event belongs to.
pub const ORG_HEADER: &str = "x-dispatch-org";

/// Connection settings for [`DispatchPublisher`].
pub struct DispatchConfig {
    /// Gateway address, `host:port` or a full `http(s)://` URL.
    pub endpoint: String,
    /// Organization the events are published under.
    pub org: String,
    /// Bearer token, if the gateway requires one.
    pub token: Option<SecretString>,
    /// Per-send request timeout.
    pub timeout: Duration,
}

/// Event gateway publisher.
///
/// Intentionally does not derive Debug; it holds the gateway token.
pub struct DispatchPublisher {
    client: reqwest::Client,
    url: String,
    org: String,
    token: Option<SecretString>,
}

impl DispatchPublisher {
    /// Build the HTTP client. Fails only if the TLS backend cannot start.
    pub fn new(config: DispatchConfig) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PublishError::Configuration(e.to_string()))?;

        let url = gateway_url(&config.endpoint);
        tracing::info!(
            url = %url,
            org = %config.org,
            authenticated = config.token.is_some(),
            "event gateway client initialized"
        );

        Ok(Self {
            client,
            url,
            org: config.org,
            token: config.token,
        })
    }

    /// URL events are POSTed to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Normalize a gateway endpoint into the URL events are POSTed to.
fn gateway_url(endpoint: &str) -> String {
    let endpoint = endpoint.trim().trim_end_matches('/');
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        format!("{endpoint}/")
    } else {
        format!("http://{endpoint}/")
    }
}

impl EventPublisher for DispatchPublisher {
    fn name(&self) -> &str {
        "dispatch"
    }

    async fn send(&self, event: &CloudEvent) -> Result<(), PublishError> {
        event.validate()?;

        let body =
            serde_json::to_vec(event).map_err(|e| PublishError::Serialization(e.to_string()))?;

        let mut request = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, CLOUD_EVENT_MEDIA_TYPE)
            .header(ORG_HEADER, &self.org)
            .body(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| PublishError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(event_id = %event.event_id, status = %status, "event gateway accepted event");
        Ok(())
    }
}
