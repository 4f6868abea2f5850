//! Request descriptors, canonical form encoding, and the selector decision
//! tables for polymorphic operations.
//!
//! Field order is part of the signing contract: the private endpoint signs
//! the exact encoded body, so encoding must preserve the order the fields
//! were given in. [`form_encode`] is therefore order-preserving, and
//! [`RequestSpec`] keeps its fields in a `Vec`, never a map.

/// A single remote call descriptor: method name plus ordered fields.
///
/// Constructed fresh per call. The transport appends `method` (and, for
/// authenticated calls, `nonce`) before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: &'static str,
    pub fields: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            fields: Vec::new(),
        }
    }

    /// Appends a field, preserving insertion order.
    pub fn field(mut self, key: &str, value: impl ToString) -> Self {
        self.fields.push((key.to_string(), value.to_string()));
        self
    }
}

/// Form-encodes fields in their given order: `k=v` pairs joined with `&`,
/// keys and values percent-escaped.
pub fn form_encode(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                urlencoding::encode(k),
                urlencoding::encode(v)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

// ─── Selector decision tables ────────────────────────────────────────────────
//
// Each polymorphic operation (where which optional argument is present
// selects the remote method name and field set) gets one table function,
// rather than conditionals scattered across call sites.

/// Market data: one market, or all markets.
pub fn market_data(market: Option<u64>) -> RequestSpec {
    match market {
        Some(id) => RequestSpec::new("singlemarketdata").field("marketid", id),
        None => RequestSpec::new("marketdatav2"),
    }
}

/// Orderbook data: one market, or all markets.
pub fn orderbook_data(market: Option<u64>) -> RequestSpec {
    match market {
        Some(id) => RequestSpec::new("singleorderdata").field("marketid", id),
        None => RequestSpec::new("orderdata"),
    }
}

/// The user's trade history, optionally limited to one market.
///
/// The limit only applies to the single-market form; the all-markets
/// method takes no fields.
pub fn my_trades(market: Option<u64>, limit: u32) -> RequestSpec {
    match market {
        Some(id) => RequestSpec::new("marketorders")
            .field("marketid", id)
            .field("limit", limit),
        None => RequestSpec::new("allmytrades"),
    }
}

/// The user's open orders, optionally limited to one market.
pub fn my_orders(market: Option<u64>) -> RequestSpec {
    match market {
        Some(id) => RequestSpec::new("myorders").field("marketid", id),
        None => RequestSpec::new("allmyorders"),
    }
}

/// Cancellation: one order, every order on a market, or every order.
///
/// An order id takes priority over a market id when both are given.
pub fn cancel_order(order: Option<u64>, market: Option<u64>) -> RequestSpec {
    match (order, market) {
        (Some(id), _) => RequestSpec::new("cancelorder").field("orderid", id),
        (None, Some(id)) => RequestSpec::new("cancelmarketorders").field("marketid", id),
        (None, None) => RequestSpec::new("cancelallorders"),
    }
}

/// New deposit address, selected by currency code, currency id, or neither.
///
/// Currency code takes priority over currency id when both are given.
/// `generatenewadress` is the wire spelling used by the exchange.
pub fn generate_new_address(currency_code: Option<&str>, currency_id: Option<u64>) -> RequestSpec {
    let spec = RequestSpec::new("generatenewadress");
    match (currency_code, currency_id) {
        (Some(code), _) => spec.field("currencycode", code),
        (None, Some(id)) => spec.field("currencyid", id),
        (None, None) => spec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_form_encode_preserves_order() {
        let a = fields(&[("marketid", "42"), ("method", "singlemarketdata")]);
        let b = fields(&[("method", "singlemarketdata"), ("marketid", "42")]);
        assert_eq!(form_encode(&a), "marketid=42&method=singlemarketdata");
        assert_eq!(form_encode(&b), "method=singlemarketdata&marketid=42");
        assert_ne!(form_encode(&a), form_encode(&b));
    }

    #[test]
    fn test_form_encode_is_deterministic() {
        let f = fields(&[("ordertype", "Buy"), ("quantity", "1.5"), ("price", "0.002")]);
        assert_eq!(form_encode(&f), form_encode(&f));
    }

    #[test]
    fn test_form_encode_escapes_reserved_characters() {
        let f = fields(&[("currencycode", "A&B=C"), ("note", "a b")]);
        assert_eq!(form_encode(&f), "currencycode=A%26B%3DC&note=a%20b");
    }

    #[test]
    fn test_market_data_selector() {
        let all = market_data(None);
        assert_eq!(all.method, "marketdatav2");
        assert!(all.fields.is_empty());

        let single = market_data(Some(42));
        assert_eq!(single.method, "singlemarketdata");
        assert_eq!(single.fields, fields(&[("marketid", "42")]));
    }

    #[test]
    fn test_orderbook_selector() {
        assert_eq!(orderbook_data(None).method, "orderdata");
        let single = orderbook_data(Some(7));
        assert_eq!(single.method, "singleorderdata");
        assert_eq!(single.fields, fields(&[("marketid", "7")]));
    }

    #[test]
    fn test_my_trades_selector() {
        let scoped = my_trades(Some(3), 200);
        assert_eq!(scoped.method, "marketorders");
        assert_eq!(scoped.fields, fields(&[("marketid", "3"), ("limit", "200")]));

        let all = my_trades(None, 200);
        assert_eq!(all.method, "allmytrades");
        assert!(all.fields.is_empty());
    }

    #[test]
    fn test_my_orders_selector() {
        assert_eq!(my_orders(Some(3)).method, "myorders");
        assert_eq!(my_orders(None).method, "allmyorders");
    }

    #[test]
    fn test_cancel_order_id_takes_priority_over_market() {
        let spec = cancel_order(Some(7), Some(3));
        assert_eq!(spec.method, "cancelorder");
        assert_eq!(spec.fields, fields(&[("orderid", "7")]));
    }

    #[test]
    fn test_cancel_by_market() {
        let spec = cancel_order(None, Some(3));
        assert_eq!(spec.method, "cancelmarketorders");
        assert_eq!(spec.fields, fields(&[("marketid", "3")]));
    }

    #[test]
    fn test_cancel_all() {
        let spec = cancel_order(None, None);
        assert_eq!(spec.method, "cancelallorders");
        assert!(spec.fields.is_empty());
    }

    #[test]
    fn test_new_address_code_takes_priority_over_id() {
        let spec = generate_new_address(Some("BTC"), Some(3));
        assert_eq!(spec.method, "generatenewadress");
        assert_eq!(spec.fields, fields(&[("currencycode", "BTC")]));

        let by_id = generate_new_address(None, Some(3));
        assert_eq!(by_id.fields, fields(&[("currencyid", "3")]));

        let bare = generate_new_address(None, None);
        assert!(bare.fields.is_empty());
    }
}
