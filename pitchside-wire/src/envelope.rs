//! The `{success, data, error}` wrapper used by every booking API response.
//!
//! The service never reports failure through HTTP status codes alone;
//! clients must inspect `success` before touching `data`.

use serde::{Deserialize, Serialize};

/// Response wrapper for all booking API endpoints.
///
/// On success `data` carries the payload (absent means "empty"); on
/// failure `error` carries a human-readable message for the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// Whether the request was served
    pub success: bool,

    /// Payload, present on success (may be omitted for empty results)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable failure message, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Wrap a failure message
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Unwrap the envelope.
    ///
    /// Success with an absent `data` field yields the empty value;
    /// failure with an absent `error` field yields `fallback`.
    pub fn into_result(self, fallback: &str) -> Result<T, String>
    where
        T: Default,
    {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(self.error.unwrap_or_else(|| fallback.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_data() {
        let envelope = Envelope::ok(vec![1, 2, 3]);
        assert_eq!(envelope.into_result("oops"), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_success_without_data_is_empty() {
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(envelope.into_result("oops"), Ok(vec![]));
    }

    #[test]
    fn test_failure_surfaces_error_text() {
        let envelope: Envelope<Vec<i32>> =
            serde_json::from_str(r#"{"success":false,"error":"ground closed"}"#).unwrap();
        assert_eq!(envelope.into_result("oops"), Err("ground closed".to_string()));
    }

    #[test]
    fn test_failure_without_error_uses_fallback() {
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(envelope.into_result("oops"), Err("oops".to_string()));
    }

    #[test]
    fn test_serialization_round_trip() {
        let envelope = Envelope::err("booking service offline");
        let json = serde_json::to_string(&envelope).unwrap();
        let deserialized: Envelope<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(envelope, deserialized);
    }

    #[test]
    fn test_ok_skips_absent_fields_on_the_wire() {
        let json = serde_json::to_string(&Envelope::ok(7)).unwrap();
        assert_eq!(json, r#"{"success":true,"data":7}"#);
    }
}
