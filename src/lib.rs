//! # Cryptsy SDK
//!
//! A Rust client for the Cryptsy exchange HTTP API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Transport & signing** — [`http::CryptsyHttp`]: one method per remote
//!    API method, order-preserving form encoding, HMAC-SHA512 signing for
//!    authenticated calls. Returns raw [`envelope::Envelope`]s.
//! 2. **Interpretation** — [`envelope`]: distinguishes declared success from
//!    declared failure from a malformed response.
//! 3. **Domain mapping** — [`domain`]: typed, field-validated transaction,
//!    order, and trade records.
//! 4. **Managed client** — [`client::CryptsyClient`]: credential-bound
//!    facade composing the layers below.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptsy_sdk::prelude::*;
//!
//! let client = CryptsyClient::builder(ApiCredentials::new(app_key, secret_key))
//!     .default_timeout(Duration::from_secs(30))
//!     .build();
//!
//! let markets = client.market_data(None, None).await?;
//! let orders = client.my_orders(Some(42), None).await?;
//! ```
//!
//! Authenticated calls carry a Unix-seconds nonce that the exchange requires
//! to be strictly increasing per secret key; the SDK enforces monotonicity
//! within one process, but two processes sharing a key can still collide.

/// Shared newtypes used across modules.
pub mod shared;

/// Typed domain records and raw-record mapping.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Credentials and request signing.
pub mod auth;

/// Low-level HTTP transport.
pub mod http;

/// The success/payload/error response envelope.
pub mod envelope;

/// `CryptsyClient` — the managed entry point.
pub mod client;

pub use error::{Result, SdkError};

pub mod prelude {
    pub use crate::auth::ApiCredentials;
    pub use crate::client::{CryptsyClient, CryptsyClientBuilder, DEFAULT_TRADE_LIMIT};
    pub use crate::domain::{OrderRecord, TradeRecord, TransactionRecord};
    pub use crate::envelope::{CallResult, Envelope};
    pub use crate::error::{ApiError, HttpError, RecordError, Result, SdkError};
    pub use crate::http::{CryptsyHttp, RequestSpec};
    pub use crate::network::{DEFAULT_PRIVATE_URL, DEFAULT_PUBLIC_URL};
    pub use crate::shared::OrderKind;
}
