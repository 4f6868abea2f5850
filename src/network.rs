//! Network URL constants for the Cryptsy API.

/// Default public (unauthenticated) API endpoint.
pub const DEFAULT_PUBLIC_URL: &str = "http://pubapi.cryptsy.com/api.php";

/// Default private (authenticated) API endpoint.
pub const DEFAULT_PRIVATE_URL: &str = "https://api.cryptsy.com/api";
