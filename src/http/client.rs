//! Low-level HTTP client — `CryptsyHttp`.
//!
//! One method per remote API method, returning the raw decoded [`Envelope`].
//! Success/failure interpretation and record mapping happen above this layer
//! — the managed client in `crate::client` wraps this.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::auth::sign::nonce;
use crate::auth::ApiCredentials;
use crate::envelope::Envelope;
use crate::error::{HttpError, Result};
use crate::http::request::{self, form_encode, RequestSpec};
use crate::shared::OrderKind;

/// Low-level client for the Cryptsy REST API.
///
/// Stateless beyond the connection pool: every call builds its own request,
/// and nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct CryptsyHttp {
    public_url: String,
    private_url: String,
    client: Client,
}

impl CryptsyHttp {
    pub fn new(public_url: &str, private_url: &str) -> Self {
        Self {
            public_url: public_url.trim_end_matches('/').to_string(),
            private_url: private_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Calls a public API method: GET with the form-encoded query string.
    pub async fn call_public(
        &self,
        spec: RequestSpec,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        let mut fields = spec.fields;
        fields.push(("method".to_string(), spec.method.to_string()));
        let query = form_encode(&fields);

        debug!(method = spec.method, endpoint = %self.public_url, "public API call");

        let req = self.client.get(format!("{}?{}", self.public_url, query));
        self.dispatch(req, timeout).await
    }

    /// Calls a private API method: POST with a signed form-encoded body.
    ///
    /// The `method` and `nonce` fields are appended to the caller's fields,
    /// the body is encoded in that exact order, and the signature is an
    /// HMAC-SHA512 hex digest over the encoded body. The request carries
    /// the `Key` (application key) and `Sign` (digest) headers.
    pub async fn call_private(
        &self,
        spec: RequestSpec,
        credentials: &ApiCredentials,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        let mut fields = spec.fields;
        fields.push(("method".to_string(), spec.method.to_string()));
        fields.push(("nonce".to_string(), nonce().to_string()));
        let body = form_encode(&fields);
        let signature = credentials.sign(&body);

        debug!(method = spec.method, endpoint = %self.private_url, "private API call");

        let req = self
            .client
            .post(&self.private_url)
            .header("Key", credentials.application_key())
            .header("Sign", &signature)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body);
        self.dispatch(req, timeout).await
    }

    async fn dispatch(&self, mut req: RequestBuilder, timeout: Option<Duration>) -> Result<Envelope> {
        if let Some(t) = timeout {
            req = req.timeout(t);
        }

        let resp = req.send().await.map_err(HttpError::from)?;
        let status = resp.status();
        let body = resp.text().await.map_err(HttpError::from)?;

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        // Invalid JSON surfaces as a decode error, distinct from transport
        // failures above.
        Ok(serde_json::from_str(&body)?)
    }

    // ─── Public methods ──────────────────────────────────────────────────

    /// Current market data for one market, or all markets.
    pub async fn market_data(
        &self,
        market: Option<u64>,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        self.call_public(request::market_data(market), timeout).await
    }

    /// Current orderbook data for one market, or all markets.
    pub async fn orderbook_data(
        &self,
        market: Option<u64>,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        self.call_public(request::orderbook_data(market), timeout)
            .await
    }

    // ─── Private methods ─────────────────────────────────────────────────

    /// The user's account info.
    pub async fn get_info(
        &self,
        credentials: &ApiCredentials,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        self.call_private(RequestSpec::new("getinfo"), credentials, timeout)
            .await
    }

    /// The user's active markets.
    pub async fn get_markets(
        &self,
        credentials: &ApiCredentials,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        self.call_private(RequestSpec::new("getmarkets"), credentials, timeout)
            .await
    }

    /// The user's deposit/withdrawal history.
    pub async fn my_transactions(
        &self,
        credentials: &ApiCredentials,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        self.call_private(RequestSpec::new("mytransactions"), credentials, timeout)
            .await
    }

    /// The last 1000 trades executed on a market.
    pub async fn market_trades(
        &self,
        credentials: &ApiCredentials,
        market: u64,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        let spec = RequestSpec::new("markettrades").field("marketid", market);
        self.call_private(spec, credentials, timeout).await
    }

    /// The open buy/sell orders on a market.
    pub async fn market_orders(
        &self,
        credentials: &ApiCredentials,
        market: u64,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        let spec = RequestSpec::new("marketorders").field("marketid", market);
        self.call_private(spec, credentials, timeout).await
    }

    /// The user's trade history, optionally limited to one market.
    pub async fn my_trades(
        &self,
        credentials: &ApiCredentials,
        market: Option<u64>,
        limit: u32,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        self.call_private(request::my_trades(market, limit), credentials, timeout)
            .await
    }

    /// The user's open orders, optionally limited to one market.
    pub async fn my_orders(
        &self,
        credentials: &ApiCredentials,
        market: Option<u64>,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        self.call_private(request::my_orders(market), credentials, timeout)
            .await
    }

    /// Buy and sell order arrays representing market depth.
    pub async fn depth(
        &self,
        credentials: &ApiCredentials,
        market: u64,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        let spec = RequestSpec::new("depth").field("marketid", market);
        self.call_private(spec, credentials, timeout).await
    }

    /// Places an order on a market.
    pub async fn create_order(
        &self,
        credentials: &ApiCredentials,
        market: u64,
        kind: OrderKind,
        quantity: f64,
        price: f64,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        let spec = RequestSpec::new("createorder")
            .field("marketid", market)
            .field("ordertype", kind)
            .field("quantity", quantity)
            .field("price", price);
        self.call_private(spec, credentials, timeout).await
    }

    /// Cancels one order, every order on a market, or every open order.
    pub async fn cancel_order(
        &self,
        credentials: &ApiCredentials,
        order: Option<u64>,
        market: Option<u64>,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        self.call_private(request::cancel_order(order, market), credentials, timeout)
            .await
    }

    /// Calculates the fees an order would incur.
    pub async fn calculate_fees(
        &self,
        credentials: &ApiCredentials,
        kind: OrderKind,
        quantity: f64,
        price: f64,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        let spec = RequestSpec::new("calculatefees")
            .field("ordertype", kind)
            .field("quantity", quantity)
            .field("price", price);
        self.call_private(spec, credentials, timeout).await
    }

    /// Generates a new deposit address for a currency.
    pub async fn generate_new_address(
        &self,
        credentials: &ApiCredentials,
        currency_code: Option<&str>,
        currency_id: Option<u64>,
        timeout: Option<Duration>,
    ) -> Result<Envelope> {
        self.call_private(
            request::generate_new_address(currency_code, currency_id),
            credentials,
            timeout,
        )
        .await
    }
}
