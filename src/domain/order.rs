//! Open-order records.

use serde_json::Value;

use super::{float_field, int_field, str_field};
use crate::error::RecordError;

const RECORD: &str = "order";

/// One of the user's open buy/sell orders.
///
/// Identity is the order id alone.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub order_id: i64,
    /// When the order was opened, as the exchange renders it.
    pub created: String,
    /// `"Buy"` or `"Sell"`.
    pub order_type: String,
    pub price: f64,
    /// Remaining un-traded quantity, in input currency.
    pub quantity: f64,
    /// Total order value (`orig_quantity * price`), in output currency.
    pub total: f64,
    /// Quantity the order was opened with, in input currency.
    pub orig_quantity: f64,
}

impl OrderRecord {
    pub fn from_raw(raw: &Value) -> Result<Self, RecordError> {
        Ok(Self {
            order_id: int_field(raw, RECORD, "order_id")?,
            created: str_field(raw, RECORD, "created")?,
            order_type: str_field(raw, RECORD, "ordertype")?,
            price: float_field(raw, RECORD, "price")?,
            quantity: float_field(raw, RECORD, "quantity")?,
            total: float_field(raw, RECORD, "total")?,
            orig_quantity: float_field(raw, RECORD, "orig_quantity")?,
        })
    }
}

impl PartialEq for OrderRecord {
    fn eq(&self, other: &Self) -> bool {
        self.order_id == other.order_id
    }
}

impl Eq for OrderRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "order_id": "7586",
            "created": "2014-03-18 10:06:44",
            "ordertype": "Sell",
            "price": "0.00543221",
            "quantity": "12.00000000",
            "total": "0.06518652",
            "orig_quantity": "12.00000000"
        })
    }

    #[test]
    fn test_parses_full_record() {
        let order = OrderRecord::from_raw(&sample()).unwrap();
        assert_eq!(order.order_id, 7586);
        assert_eq!(order.order_type, "Sell");
        assert_eq!(order.price, 0.00543221);
        assert_eq!(order.quantity, 12.0);
        assert_eq!(order.orig_quantity, 12.0);
    }

    #[test]
    fn test_missing_field_fails_construction() {
        let mut raw = sample();
        raw.as_object_mut().unwrap().remove("orig_quantity");
        assert_eq!(
            OrderRecord::from_raw(&raw).unwrap_err(),
            RecordError::MissingField {
                record: "order",
                field: "orig_quantity"
            }
        );
    }

    #[test]
    fn test_non_numeric_order_id_is_invalid() {
        let mut raw = sample();
        raw["order_id"] = json!("abc");
        assert!(matches!(
            OrderRecord::from_raw(&raw),
            Err(RecordError::InvalidNumericField { field: "order_id", .. })
        ));
    }

    #[test]
    fn test_equality_is_id_only() {
        let a = OrderRecord::from_raw(&sample()).unwrap();
        let mut raw = sample();
        raw["price"] = json!("1.0");
        let b = OrderRecord::from_raw(&raw).unwrap();
        assert_eq!(a, b);
    }
}
