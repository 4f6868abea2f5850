//! Nonce generation and HMAC-SHA512 request signing.
//!
//! The exchange's replay protection requires the nonce to be strictly
//! increasing across all authenticated calls sharing one secret key. The
//! wire unit is Unix seconds, so two calls inside the same wall-clock
//! second would collide; [`nonce`] therefore never returns the same value
//! twice within a process, stepping past the clock when necessary.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Last nonce issued by this process.
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// Returns a strictly increasing nonce based on Unix time in seconds.
///
/// Successive calls always return a larger value, even when the clock
/// hasn't advanced or has jumped backwards.
pub fn nonce() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs();

    let mut prev = LAST_NONCE.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST_NONCE.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}

/// Computes the `Sign` header value: HMAC-SHA512 over the exact
/// form-encoded request body, keyed by the secret key, hex-encoded.
pub fn sign(secret_key: &str, payload: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(secret_key.as_bytes())
        .expect("HMAC-SHA512 accepts keys of any length");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_is_deterministic() {
        let sig1 = sign("secret", "marketid=42&method=singlemarketdata&nonce=1");
        let sig2 = sign("secret", "marketid=42&method=singlemarketdata&nonce=1");
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_sign_is_key_sensitive() {
        let payload = "method=getinfo&nonce=1000000000";
        assert_ne!(sign("secret-a", payload), sign("secret-b", payload));
    }

    #[test]
    fn test_sign_is_payload_sensitive() {
        assert_ne!(
            sign("secret", "method=getinfo&nonce=1"),
            sign("secret", "method=getinfo&nonce=2")
        );
    }

    #[test]
    fn test_sign_output_is_128_hex_chars() {
        let sig = sign("secret", "method=getinfo&nonce=1");
        assert_eq!(sig.len(), 128);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_nonce_is_strictly_increasing() {
        let mut prev = nonce();
        for _ in 0..1_000 {
            let current = nonce();
            assert!(current > prev, "nonce did not increase: {prev} -> {current}");
            prev = current;
        }
    }
}
