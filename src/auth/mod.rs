//! Authentication — API credentials and request signing.
//!
//! ## Security Model
//!
//! - The secret key is held in a [`secrecy::SecretString`] so it is zeroized
//!   on drop and excluded from `Debug` output. It is only ever read inside
//!   [`sign::sign`], and only the resulting hex digest leaves this module.
//! - The application key is a public identifier and travels in the `Key`
//!   header of every authenticated request.
//! - Neither key is attached to public (unauthenticated) calls.

pub mod sign;

use secrecy::{ExposeSecret, SecretString};

/// An application-key/secret-key pair for authenticated API calls.
pub struct ApiCredentials {
    application_key: String,
    /// Signing key, zeroized on drop.
    secret_key: SecretString,
}

impl ApiCredentials {
    pub fn new(application_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            application_key: application_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// The public application key, sent in the `Key` request header.
    pub fn application_key(&self) -> &str {
        &self.application_key
    }

    /// Signs a form-encoded request body, returning the hex digest for the
    /// `Sign` request header.
    pub fn sign(&self, payload: &str) -> String {
        sign::sign(self.secret_key.expose_secret(), payload)
    }
}

impl Clone for ApiCredentials {
    fn clone(&self) -> Self {
        Self {
            application_key: self.application_key.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("application_key", &self.application_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
