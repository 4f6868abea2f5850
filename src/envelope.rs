//! The `success`/`return`/`error` response envelope and its interpretation.
//!
//! Every Cryptsy response, public or private, is a JSON object carrying a
//! success flag (the digit `1` or `0`, usually as a string), and either a
//! `return` payload or an `error` message. Exactly one of the two is
//! meaningful, chosen by the flag; the other must never be trusted.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, SdkError};

/// Decoded top-level API response, prior to success/failure interpretation.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Success flag exactly as transmitted (`"1"`, `1`, `"0"`, ...).
    #[serde(default)]
    pub success: Option<Value>,
    /// Payload, present on success. Arbitrary JSON: object, list, or scalar.
    #[serde(rename = "return", default)]
    pub payload: Option<Value>,
    /// Error message, present on declared failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    /// Interprets the envelope into a [`CallResult`].
    ///
    /// A flag that parses as the integer 1 means success; any other integer
    /// means the exchange declared the call failed. An absent or non-numeric
    /// flag is a malformed envelope and fails with [`SdkError::Protocol`] —
    /// a different condition from a declared API failure.
    pub fn interpret(self) -> Result<CallResult, SdkError> {
        let flag = self
            .success
            .as_ref()
            .ok_or_else(|| SdkError::Protocol("envelope missing success flag".into()))?;
        let flag = parse_flag(flag).ok_or_else(|| {
            SdkError::Protocol(format!("envelope success flag is not numeric: {flag}"))
        })?;

        if flag == 1 {
            Ok(CallResult {
                success: true,
                // A success envelope without a `return` key carries null.
                data: Some(self.payload.unwrap_or(Value::Null)),
                error: None,
            })
        } else {
            Ok(CallResult {
                success: false,
                data: None,
                error: Some(ApiError::new(self.error.unwrap_or_default())),
            })
        }
    }
}

/// Parses the success flag, accepting a JSON number or a numeric string.
fn parse_flag(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Outcome of an interpreted envelope.
///
/// Invariant: `success` is true iff `data` is present and `error` is absent.
#[derive(Debug, Clone)]
pub struct CallResult {
    pub success: bool,
    pub data: Option<Value>,
    pub error: Option<ApiError>,
}

impl CallResult {
    /// Returns the payload on success, or propagates the carried [`ApiError`].
    pub fn into_payload(self) -> Result<Value, SdkError> {
        if self.success {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(self
                .error
                .unwrap_or_else(|| ApiError::new(""))
                .into())
        }
    }
}
