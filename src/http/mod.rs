//! HTTP transport: request construction and the low-level client.

pub mod client;
pub mod request;

pub use client::CryptsyHttp;
pub use request::{form_encode, RequestSpec};
