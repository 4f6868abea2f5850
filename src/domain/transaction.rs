//! Deposit/withdrawal transaction records.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use super::{float_field, int_field, str_field};
use crate::error::RecordError;

const RECORD: &str = "transaction";

/// One deposit or withdrawal from the user's transaction history.
///
/// Identity is the transaction id alone: two records with the same `trxid`
/// compare equal regardless of their other fields.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    /// Transaction id. A hex string for everything except Cryptsy Points.
    pub trxid: String,
    pub fee: f64,
    /// When the transaction occurred, from the `timestamp` Unix-seconds field.
    pub timestamp: DateTime<Utc>,
    /// The exchange's own string rendering of [`Self::timestamp`].
    pub datetime: String,
    /// Source currency name.
    pub currency: String,
    pub amount: f64,
    /// Wallet address the funds moved through.
    pub address: String,
    /// Timezone the `datetime` field is rendered in.
    pub timezone: String,
    /// Either `"Deposit"` or `"Withdrawal"`.
    pub kind: String,
}

impl TransactionRecord {
    /// Builds a record from one raw listing element, validating that every
    /// required field is present and numeric fields parse.
    pub fn from_raw(raw: &Value) -> Result<Self, RecordError> {
        let secs = int_field(raw, RECORD, "timestamp")?;
        let timestamp = Utc.timestamp_opt(secs, 0).single().ok_or_else(|| {
            RecordError::InvalidNumericField {
                record: RECORD,
                field: "timestamp",
                value: secs.to_string(),
            }
        })?;

        Ok(Self {
            trxid: str_field(raw, RECORD, "trxid")?,
            fee: float_field(raw, RECORD, "fee")?,
            timestamp,
            datetime: str_field(raw, RECORD, "datetime")?,
            currency: str_field(raw, RECORD, "currency")?,
            amount: float_field(raw, RECORD, "amount")?,
            address: str_field(raw, RECORD, "address")?,
            timezone: str_field(raw, RECORD, "timezone")?,
            kind: str_field(raw, RECORD, "type")?,
        })
    }
}

impl PartialEq for TransactionRecord {
    fn eq(&self, other: &Self) -> bool {
        self.trxid == other.trxid
    }
}

impl Eq for TransactionRecord {}
