//! Subscription validation handshake payloads.
//!
//! Event Grid proves ownership of an endpoint by POSTing a JSON array with a
//! single validation event. The receiver answers with the same code wrapped in
//! a [`ValidationResponse`].

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// The `data` object of a validation event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationData {
    /// Opaque token that must be echoed back verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub validation_code: String,
    /// Manual validation URL. Informational only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub validation_url: String,
}

/// One element of a subscription validation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ValidationData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,
}

/// Reply body completing the handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub validation_response: String,
}

impl ValidationResponse {
    /// Build the reply for a validation event. The code is copied unchanged.
    pub fn echo(event: &ValidationEvent) -> Self {
        Self {
            validation_response: event.data.validation_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_event_deserializes_provider_payload() {
        let json = r#"[{
            "data": {"validationCode": "abc123", "validationUrl": "https://x"},
            "eventType": "Microsoft.EventGrid.SubscriptionValidationEvent",
            "topic": "/subscriptions/t"
        }]"#;
        let events: Vec<ValidationEvent> = serde_json::from_str(json).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data.validation_code, "abc123");
        assert_eq!(events[0].data.validation_url, "https://x");
        assert_eq!(events[0].topic, "/subscriptions/t");
    }

    #[test]
    fn test_validation_event_tolerates_missing_fields() {
        let events: Vec<ValidationEvent> = serde_json::from_str("[{}]").unwrap();
        assert_eq!(events[0], ValidationEvent::default());
    }

    #[test]
    fn test_validation_response_serializes_camel_case() {
        let resp = ValidationResponse {
            validation_response: "abc123".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"validationResponse":"abc123"}"#
        );
    }

    #[test]
    fn test_echo_copies_code_verbatim() {
        let event = ValidationEvent {
            data: ValidationData {
                validation_code: "  Ünïcode-\"quoted\"  ".to_string(),
                validation_url: String::new(),
            },
            ..Default::default()
        };
        let resp = ValidationResponse::echo(&event);
        assert_eq!(resp.validation_response, event.data.validation_code);
    }

    #[test]
    fn test_validation_event_tolerates_null_fields() {
        let json = r#"[{
            "data": {"validationCode": "abc", "validationUrl": null},
            "eventType": null,
            "topic": "t"
        }]"#;
        let events: Vec<ValidationEvent> = serde_json::from_str(json).unwrap();

        assert_eq!(events[0].data.validation_code, "abc");
        assert_eq!(events[0].data.validation_url, "");
        assert_eq!(events[0].event_type, "");
    }

    #[test]
    fn test_null_data_decodes_as_empty_code() {
        let events: Vec<ValidationEvent> =
            serde_json::from_str(r#"[{"data": null, "topic": "t"}]"#).unwrap();
        assert_eq!(events[0].data, ValidationData::default());
    }
}
