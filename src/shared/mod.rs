//! Shared newtypes used across the transport and domain modules.
//!
//! These types are serialization-transparent: they serialize to exactly
//! the strings the exchange expects on the wire.

use serde::{Deserialize, Serialize};

// ─── OrderKind ───────────────────────────────────────────────────────────────

/// Order direction: Buy or Sell.
///
/// The exchange uses the capitalized words `"Buy"` / `"Sell"` both in
/// request fields (`ordertype`) and in record payloads (`tradetype`,
/// `initiate_ordertype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    Buy,
    Sell,
}

impl OrderKind {
    /// Returns the wire-format string expected by the Cryptsy API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_kind_wire_format() {
        assert_eq!(OrderKind::Buy.as_str(), "Buy");
        assert_eq!(OrderKind::Sell.as_str(), "Sell");
    }

    #[test]
    fn test_order_kind_serde() {
        let json = serde_json::to_string(&OrderKind::Buy).unwrap();
        assert_eq!(json, "\"Buy\"");
        let back: OrderKind = serde_json::from_str("\"Sell\"").unwrap();
        assert_eq!(back, OrderKind::Sell);
    }
}
