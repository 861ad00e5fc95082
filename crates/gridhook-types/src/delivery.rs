use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// What the HTTP caller is told when the downstream send fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryPolicy {
    /// Log the failure and acknowledge the request anyway (at-most-once).
    #[default]
    BestEffort,
    /// Surface the failure to the caller so the provider redelivers.
    FailRequest,
}

impl fmt::Display for DeliveryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryPolicy::BestEffort => write!(f, "best-effort"),
            DeliveryPolicy::FailRequest => write!(f, "fail-request"),
        }
    }
}

impl FromStr for DeliveryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best-effort" | "best_effort" => Ok(DeliveryPolicy::BestEffort),
            "fail-request" | "fail_request" => Ok(DeliveryPolicy::FailRequest),
            other => Err(format!("invalid delivery policy: '{other}'")),
        }
    }
}
