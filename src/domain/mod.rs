//! Typed domain records mapped from raw payload records.
//!
//! Listing payloads arrive as JSON arrays of loosely-typed objects whose
//! numeric fields are usually transmitted as strings. Each record type
//! validates its required fields at construction: a missing key or an
//! unparseable number fails the construction, never producing a partially
//! populated record. Records are immutable once built.

pub mod order;
pub mod trade;
pub mod transaction;

pub use order::OrderRecord;
pub use trade::TradeRecord;
pub use transaction::TransactionRecord;

use serde_json::Value;

use crate::error::{RecordError, SdkError};

/// Maps a listing payload by applying `parse` to every element.
///
/// The first failure aborts the whole listing — no partial or best-effort
/// mapping. A payload that is not an array is a protocol error.
pub fn map_listing<T>(
    payload: &Value,
    parse: impl Fn(&Value) -> Result<T, RecordError>,
) -> Result<Vec<T>, SdkError> {
    let items = payload
        .as_array()
        .ok_or_else(|| SdkError::Protocol("expected a listing payload, got a non-array".into()))?;
    items
        .iter()
        .map(|item| parse(item).map_err(SdkError::from))
        .collect()
}

// ─── Raw field extraction ────────────────────────────────────────────────────

/// Required string field. Numbers are accepted and stringified, matching
/// the exchange's habit of switching between the two.
pub(crate) fn str_field(
    raw: &Value,
    record: &'static str,
    field: &'static str,
) -> Result<String, RecordError> {
    match raw.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        None | Some(Value::Null) => Err(RecordError::MissingField { record, field }),
        Some(other) => Err(RecordError::InvalidField {
            record,
            field,
            value: other.to_string(),
        }),
    }
}

/// Required numeric field, coerced to `f64`. String values are parsed;
/// a present-but-unparseable value is distinguished from an absent one.
pub(crate) fn float_field(
    raw: &Value,
    record: &'static str,
    field: &'static str,
) -> Result<f64, RecordError> {
    match raw.get(field) {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| RecordError::InvalidNumericField {
            record,
            field,
            value: n.to_string(),
        }),
        Some(Value::String(s)) => {
            s.trim()
                .parse()
                .map_err(|_| RecordError::InvalidNumericField {
                    record,
                    field,
                    value: s.clone(),
                })
        }
        None | Some(Value::Null) => Err(RecordError::MissingField { record, field }),
        Some(other) => Err(RecordError::InvalidNumericField {
            record,
            field,
            value: other.to_string(),
        }),
    }
}

/// Required integer field (ids, timestamps).
pub(crate) fn int_field(
    raw: &Value,
    record: &'static str,
    field: &'static str,
) -> Result<i64, RecordError> {
    match raw.get(field) {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| RecordError::InvalidNumericField {
            record,
            field,
            value: n.to_string(),
        }),
        Some(Value::String(s)) => {
            s.trim()
                .parse()
                .map_err(|_| RecordError::InvalidNumericField {
                    record,
                    field,
                    value: s.clone(),
                })
        }
        None | Some(Value::Null) => Err(RecordError::MissingField { record, field }),
        Some(other) => Err(RecordError::InvalidNumericField {
            record,
            field,
            value: other.to_string(),
        }),
    }
}
