//! Secret key handling.
//!
//! The integration secret key authenticates outbound API calls (bearer token)
//! and keys the HMAC that signs inbound webhook deliveries. It is held for the
//! life of a client and never rendered by `Debug` or `Display`.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{CoreError, Result};

/// Paystack integration secret key (`sk_test_...` / `sk_live_...`).
///
/// # Example
///
/// ```
/// use paystack_core::SecretKey;
///
/// let key = SecretKey::new("sk_test_abc123").unwrap();
/// assert!(key.is_test());
/// assert_eq!(format!("{key:?}"), "SecretKey([REDACTED])");
/// ```
#[derive(Clone)]
pub struct SecretKey(SecretString);

impl SecretKey {
    /// Wraps a secret key.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSecretKey` if the key is empty or only
    /// whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(CoreError::InvalidSecretKey("secret key is empty".to_string()));
        }
        Ok(Self(SecretString::from(key)))
    }

    /// Returns the raw key material.
    ///
    /// Callers must not log the returned value.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Returns the key as bytes for MAC computation.
    pub fn as_bytes(&self) -> &[u8] {
        self.expose().as_bytes()
    }

    /// Whether this is a test-mode key.
    pub fn is_test(&self) -> bool {
        self.expose().starts_with("sk_test_")
    }

    /// Whether this is a live-mode key.
    pub fn is_live(&self) -> bool {
        self.expose().starts_with("sk_live_")
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

impl std::str::FromStr for SecretKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_rejected() {
        assert!(SecretKey::new("").is_err());
        assert!(SecretKey::new("   ").is_err());
    }

    #[test]
    fn debug_never_prints_key() {
        let key = SecretKey::new("sk_live_very_secret").unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("very_secret"));
    }

    #[test]
    fn mode_detection() {
        assert!(SecretKey::new("sk_test_1").unwrap().is_test());
        assert!(SecretKey::new("sk_live_1").unwrap().is_live());

        let custom = SecretKey::new("whsec_local").unwrap();
        assert!(!custom.is_test());
        assert!(!custom.is_live());
    }

    #[test]
    fn exposes_exact_bytes() {
        let key = SecretKey::new("sk_test_xyz").unwrap();
        assert_eq!(key.as_bytes(), b"sk_test_xyz");
    }
}
