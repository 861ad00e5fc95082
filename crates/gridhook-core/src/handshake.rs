//! Subscription validation handshake.
//!
//! Event Grid will not deliver events to an endpoint until the endpoint echoes
//! the `validationCode` from a one-element validation array.

use gridhook_types::error::HandshakeError;
use gridhook_types::validation::{ValidationEvent, ValidationResponse};

/// Decode a validation request body and build the reply.
///
/// The body must be a JSON array with exactly one element.
pub fn validate_subscription(body: &[u8]) -> Result<ValidationResponse, HandshakeError> {
    let events: Vec<ValidationEvent> =
        serde_json::from_slice(body).map_err(|e| HandshakeError::Malformed(e.to_string()))?;

    let [event] = events.as_slice() else {
        return Err(HandshakeError::Cardinality(events.len()));
    };

    tracing::info!(
        topic = %event.topic,
        event_type = %event.event_type,
        "completing subscription validation handshake"
    );

    Ok(ValidationResponse::echo(event))
}

/// Serialize a validation reply to its JSON body.
pub fn encode_response(response: &ValidationResponse) -> Result<Vec<u8>, HandshakeError> {
    serde_json::to_vec(response).map_err(|e| HandshakeError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_with_codes(codes: &[&str]) -> Vec<u8> {
        let events: Vec<serde_json::Value> = codes
            .iter()
            .map(|code| {
                serde_json::json!({
                    "data": {"validationCode": code, "validationUrl": "https://x"},
                    "eventType": "v",
                    "topic": "t",
                })
            })
            .collect();
        serde_json::to_vec(&events).unwrap()
    }

    #[test]
    fn test_single_event_echoes_code() {
        for code in ["abc123", "", "512d38b6-c7b8-40c8-89fe-f46f9e9622b6", "ünïcödé \"q\""] {
            let resp = validate_subscription(&body_with_codes(&[code])).unwrap();
            assert_eq!(resp.validation_response, code);
        }
    }

    #[test]
    fn test_wrong_cardinality_is_rejected() {
        for codes in [vec![], vec!["a", "b"], vec!["a", "b", "c"]] {
            let err = validate_subscription(&body_with_codes(&codes)).unwrap_err();
            assert!(
                matches!(err, HandshakeError::Cardinality(n) if n == codes.len()),
                "unexpected error for {} events: {err}",
                codes.len()
            );
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let bodies: [&[u8]; 3] = [b"not json", b"{\"data\":{}}", b""];
        for body in bodies {
            assert!(matches!(
                validate_subscription(body),
                Err(HandshakeError::Malformed(_))
            ));
        }
    }

    #[test]
    fn test_encode_response_matches_wire_shape() {
        let resp = validate_subscription(&body_with_codes(&["abc123"])).unwrap();
        let bytes = encode_response(&resp).unwrap();
        assert_eq!(bytes, br#"{"validationResponse":"abc123"}"#);
    }

    #[test]
    fn test_null_informational_fields_still_echo() {
        let body = br#"[{"data":{"validationCode":"abc","validationUrl":null},"eventType":null,"topic":"t"}]"#;
        let resp = validate_subscription(body).unwrap();
        assert_eq!(resp.validation_response, "abc");
    }
}
