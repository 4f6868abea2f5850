//! High-level client — `CryptsyClient`.
//!
//! Binds one credential pair and a default timeout, delegates each
//! operation to [`CryptsyHttp`], funnels every response through envelope
//! interpretation, and maps listing payloads into typed domain records.
//! Failures propagate to the caller unmodified; nothing is retried,
//! cached, or logged on the way up.

use std::time::Duration;

use serde_json::Value;

use crate::auth::ApiCredentials;
use crate::domain::{self, OrderRecord, TradeRecord, TransactionRecord};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::http::CryptsyHttp;
use crate::network::{DEFAULT_PRIVATE_URL, DEFAULT_PUBLIC_URL};
use crate::shared::OrderKind;

/// Default `limit` for single-market trade-history queries.
pub const DEFAULT_TRADE_LIMIT: u32 = 200;

/// The managed entry point for the Cryptsy API.
pub struct CryptsyClient {
    http: CryptsyHttp,
    credentials: ApiCredentials,
    default_timeout: Option<Duration>,
}

impl CryptsyClient {
    pub fn builder(credentials: ApiCredentials) -> CryptsyClientBuilder {
        CryptsyClientBuilder::new(credentials)
    }

    /// Convenience constructor with default endpoints and no default timeout.
    pub fn new(credentials: ApiCredentials) -> Self {
        Self::builder(credentials).build()
    }

    /// Resolves the timeout for one call: the per-call value if provided
    /// and non-zero, else the configured default.
    ///
    /// A zero per-call duration falls back to the default rather than
    /// meaning "fail immediately"; this mirrors the remote API's reference
    /// client and is locked in by a test below.
    fn effective_timeout(&self, per_call: Option<Duration>) -> Option<Duration> {
        match per_call {
            Some(t) if !t.is_zero() => Some(t),
            _ => self.default_timeout,
        }
    }

    fn unwrap(envelope: Envelope) -> Result<Value> {
        envelope.interpret()?.into_payload()
    }

    // ─── Market data (public) ────────────────────────────────────────────

    /// Current market data for one market, or all markets.
    pub async fn market_data(&self, market: Option<u64>, timeout: Option<Duration>) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(self.http.market_data(market, t).await?)
    }

    /// Current orderbook data for one market, or all markets.
    pub async fn orderbook_data(
        &self,
        market: Option<u64>,
        timeout: Option<Duration>,
    ) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(self.http.orderbook_data(market, t).await?)
    }

    // ─── Account (private) ───────────────────────────────────────────────

    /// The user's account info.
    pub async fn get_info(&self, timeout: Option<Duration>) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(self.http.get_info(&self.credentials, t).await?)
    }

    /// The user's active markets.
    pub async fn get_markets(&self, timeout: Option<Duration>) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(self.http.get_markets(&self.credentials, t).await?)
    }

    /// The user's deposit/withdrawal history, as typed records.
    pub async fn transactions(&self, timeout: Option<Duration>) -> Result<Vec<TransactionRecord>> {
        let t = self.effective_timeout(timeout);
        let payload = Self::unwrap(self.http.my_transactions(&self.credentials, t).await?)?;
        domain::map_listing(&payload, TransactionRecord::from_raw)
    }

    /// Generates a new deposit address, selected by currency code or id.
    pub async fn generate_new_address(
        &self,
        currency_code: Option<&str>,
        currency_id: Option<u64>,
        timeout: Option<Duration>,
    ) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(
            self.http
                .generate_new_address(&self.credentials, currency_code, currency_id, t)
                .await?,
        )
    }

    // ─── Market activity (private) ───────────────────────────────────────

    /// The last 1000 trades executed on a market.
    pub async fn market_trades(&self, market: u64, timeout: Option<Duration>) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(self.http.market_trades(&self.credentials, market, t).await?)
    }

    /// The open buy/sell orders on a market.
    pub async fn market_orders(&self, market: u64, timeout: Option<Duration>) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(self.http.market_orders(&self.credentials, market, t).await?)
    }

    /// Buy and sell order arrays representing market depth.
    pub async fn depth(&self, market: u64, timeout: Option<Duration>) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(self.http.depth(&self.credentials, market, t).await?)
    }

    // ─── The user's orders and trades (private) ──────────────────────────

    /// The user's trade history as typed records, optionally limited to one
    /// market. `limit` only applies to the single-market form.
    pub async fn my_trades(
        &self,
        market: Option<u64>,
        limit: u32,
        timeout: Option<Duration>,
    ) -> Result<Vec<TradeRecord>> {
        let t = self.effective_timeout(timeout);
        let payload = Self::unwrap(
            self.http
                .my_trades(&self.credentials, market, limit, t)
                .await?,
        )?;
        domain::map_listing(&payload, TradeRecord::from_raw)
    }

    /// The user's open orders as typed records, optionally limited to one
    /// market.
    pub async fn my_orders(
        &self,
        market: Option<u64>,
        timeout: Option<Duration>,
    ) -> Result<Vec<OrderRecord>> {
        let t = self.effective_timeout(timeout);
        let payload = Self::unwrap(self.http.my_orders(&self.credentials, market, t).await?)?;
        domain::map_listing(&payload, OrderRecord::from_raw)
    }

    /// Places an order on a market.
    pub async fn create_order(
        &self,
        market: u64,
        kind: OrderKind,
        quantity: f64,
        price: f64,
        timeout: Option<Duration>,
    ) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(
            self.http
                .create_order(&self.credentials, market, kind, quantity, price, t)
                .await?,
        )
    }

    /// Cancels one order, every order on a market, or every open order.
    ///
    /// An order id takes priority over a market id; with neither, every
    /// open order across all markets is cancelled.
    pub async fn cancel_order(
        &self,
        order: Option<u64>,
        market: Option<u64>,
        timeout: Option<Duration>,
    ) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(
            self.http
                .cancel_order(&self.credentials, order, market, t)
                .await?,
        )
    }

    /// Calculates the fees an order would incur.
    pub async fn calculate_fees(
        &self,
        kind: OrderKind,
        quantity: f64,
        price: f64,
        timeout: Option<Duration>,
    ) -> Result<Value> {
        let t = self.effective_timeout(timeout);
        Self::unwrap(
            self.http
                .calculate_fees(&self.credentials, kind, quantity, price, t)
                .await?,
        )
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CryptsyClientBuilder {
    credentials: ApiCredentials,
    public_url: String,
    private_url: String,
    default_timeout: Option<Duration>,
}

impl CryptsyClientBuilder {
    pub fn new(credentials: ApiCredentials) -> Self {
        Self {
            credentials,
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            private_url: DEFAULT_PRIVATE_URL.to_string(),
            default_timeout: None,
        }
    }

    /// Overrides the public endpoint (useful for tests).
    pub fn public_url(mut self, url: &str) -> Self {
        self.public_url = url.to_string();
        self
    }

    /// Overrides the private endpoint (useful for tests).
    pub fn private_url(mut self, url: &str) -> Self {
        self.private_url = url.to_string();
        self
    }

    /// Default timeout applied when a call doesn't supply its own.
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> CryptsyClient {
        CryptsyClient {
            http: CryptsyHttp::new(&self.public_url, &self.private_url),
            credentials: self.credentials,
            default_timeout: self.default_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_default(default: Option<Duration>) -> CryptsyClient {
        let mut builder = CryptsyClient::builder(ApiCredentials::new("app", "secret"));
        if let Some(t) = default {
            builder = builder.default_timeout(t);
        }
        builder.build()
    }

    #[test]
    fn test_per_call_timeout_wins() {
        let client = client_with_default(Some(Duration::from_secs(30)));
        assert_eq!(
            client.effective_timeout(Some(Duration::from_secs(5))),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_unset_timeout_falls_back_to_default() {
        let client = client_with_default(Some(Duration::from_secs(30)));
        assert_eq!(
            client.effective_timeout(None),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        // A zero duration means "unset", not "fail immediately".
        let client = client_with_default(Some(Duration::from_secs(30)));
        assert_eq!(
            client.effective_timeout(Some(Duration::ZERO)),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_no_default_and_no_per_call_means_no_timeout() {
        let client = client_with_default(None);
        assert_eq!(client.effective_timeout(None), None);
        assert_eq!(client.effective_timeout(Some(Duration::ZERO)), None);
    }
}
