//! Cloud event envelope as delivered by Event Grid (CloudEvents 0.1 JSON).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InvalidEventError;
use crate::nullable::null_as_default;

/// CloudEvents specification version emitted by Event Grid.
pub const CLOUD_EVENTS_VERSION: &str = "0.1";

/// Longest `eventType` the event bus accepts.
pub const MAX_EVENT_TYPE_LEN: usize = 128;

/// A cloud event envelope.
///
/// Decoding is lenient: missing attributes default to empty so that a
/// syntactically valid body always decodes. Required attributes are checked
/// separately by [`CloudEvent::validate`] before the event is published.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type_version: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cloud_events_version: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    #[serde(rename = "eventID", default, deserialize_with = "null_as_default")]
    pub event_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<DateTime<Utc>>,

    #[serde(rename = "schemaURL", default, skip_serializing_if = "Option::is_none")]
    pub schema_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub extensions: BTreeMap<String, serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CloudEvent {
    /// Check the attributes the event bus requires.
    pub fn validate(&self) -> Result<(), InvalidEventError> {
        if self.event_type.is_empty() {
            return Err(InvalidEventError::MissingAttribute("eventType"));
        }
        if self.event_type.len() > MAX_EVENT_TYPE_LEN {
            return Err(InvalidEventError::EventTypeTooLong {
                len: self.event_type.len(),
                max: MAX_EVENT_TYPE_LEN,
            });
        }
        if self.source.is_empty() {
            return Err(InvalidEventError::MissingAttribute("source"));
        }
        if self.event_id.is_empty() {
            return Err(InvalidEventError::MissingAttribute("eventID"));
        }
        Ok(())
    }
}
