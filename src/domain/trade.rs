//! Executed-trade records.

use serde_json::Value;

use super::{float_field, int_field, str_field};
use crate::error::RecordError;

const RECORD: &str = "trade";

/// One executed trade from the user's history.
///
/// Identity is the trade id alone.
#[derive(Debug, Clone)]
pub struct TradeRecord {
    /// `"Buy"` or `"Sell"`.
    pub trade_type: String,
    pub trade_id: i64,
    /// When the trade occurred, as the exchange renders it.
    pub datetime: String,
    pub market_id: i64,
    /// The order this trade executed against.
    pub order_id: i64,
    pub fee: f64,
    /// The order type that initiated the trade, `"Buy"` or `"Sell"`.
    pub initiate_order_type: String,
    /// Amount received in output currency (`quantity * trade_price - fee`).
    pub total: f64,
    pub trade_price: f64,
    /// Quantity of the input currency.
    pub quantity: f64,
}

impl TradeRecord {
    pub fn from_raw(raw: &Value) -> Result<Self, RecordError> {
        Ok(Self {
            trade_type: str_field(raw, RECORD, "tradetype")?,
            trade_id: int_field(raw, RECORD, "tradeid")?,
            datetime: str_field(raw, RECORD, "datetime")?,
            market_id: int_field(raw, RECORD, "marketid")?,
            order_id: int_field(raw, RECORD, "order_id")?,
            fee: float_field(raw, RECORD, "fee")?,
            initiate_order_type: str_field(raw, RECORD, "initiate_ordertype")?,
            total: float_field(raw, RECORD, "total")?,
            trade_price: float_field(raw, RECORD, "tradeprice")?,
            quantity: float_field(raw, RECORD, "quantity")?,
        })
    }
}

impl PartialEq for TradeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.trade_id == other.trade_id
    }
}

impl Eq for TradeRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "tradetype": "Buy",
            "tradeid": "86636223",
            "datetime": "2014-03-20 03:28:49",
            "marketid": "155",
            "order_id": "94552826",
            "fee": "0.00001332",
            "initiate_ordertype": "Sell",
            "total": "0.00666000",
            "tradeprice": "0.00000111",
            "quantity": "6000.00000000"
        })
    }

    #[test]
    fn test_parses_full_record() {
        let trade = TradeRecord::from_raw(&sample()).unwrap();
        assert_eq!(trade.trade_id, 86636223);
        assert_eq!(trade.market_id, 155);
        assert_eq!(trade.order_id, 94552826);
        assert_eq!(trade.trade_type, "Buy");
        assert_eq!(trade.initiate_order_type, "Sell");
        assert_eq!(trade.trade_price, 0.00000111);
        assert_eq!(trade.quantity, 6000.0);
    }

    #[test]
    fn test_missing_field_fails_construction() {
        let mut raw = sample();
        raw.as_object_mut().unwrap().remove("tradeprice");
        assert_eq!(
            TradeRecord::from_raw(&raw).unwrap_err(),
            RecordError::MissingField {
                record: "trade",
                field: "tradeprice"
            }
        );
    }

    #[test]
    fn test_equality_is_id_only() {
        let a = TradeRecord::from_raw(&sample()).unwrap();
        let mut raw = sample();
        raw["quantity"] = json!("1.0");
        raw["fee"] = json!("0.5");
        let b = TradeRecord::from_raw(&raw).unwrap();
        assert_eq!(a, b);

        raw["tradeid"] = json!("1");
        let c = TradeRecord::from_raw(&raw).unwrap();
        assert_ne!(a, c);
    }
}
