use serde::Deserialize;

/// Error fields every TextMagic response may carry next to (or instead of) its payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_message: String,
}

impl ErrorEnvelope {
    pub fn is_error(&self) -> bool {
        self.error_code != 0
    }
}

pub fn decode_error_envelope(body: &[u8]) -> Result<ErrorEnvelope, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_provider_error() {
        let envelope =
            decode_error_envelope(br#"{"error_code":3,"error_message":"Command is undefined"}"#)
                .unwrap();
        assert!(envelope.is_error());
        assert_eq!(envelope.error_code, 3);
        assert_eq!(envelope.error_message, "Command is undefined");
    }

    #[test]
    fn payload_without_error_fields_is_not_an_error() {
        let envelope = decode_error_envelope(br#"{"balance":417.7}"#).unwrap();
        assert!(!envelope.is_error());

        let envelope =
            decode_error_envelope(br#"{"8624389":{"text":"hi","status":"d"}}"#).unwrap();
        assert!(!envelope.is_error());

        let envelope = decode_error_envelope(br#"{"error_code":0,"balance":1}"#).unwrap();
        assert!(!envelope.is_error());
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(decode_error_envelope(b"<html>maintenance</html>").is_err());
        assert!(decode_error_envelope(b"").is_err());
    }
}
