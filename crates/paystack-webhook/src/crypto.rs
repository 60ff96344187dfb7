//! Delivery signature computation and verification.
//!
//! The service signs each delivery with HMAC-SHA512 over the exact request
//! body, keyed with the integration secret key, and sends the digest as
//! lowercase hex in the `x-paystack-signature` header.

use hmac::{Hmac, Mac};
use http::HeaderMap;
use paystack_core::SecretKey;
use sha2::Sha512;
use subtle::ConstantTimeEq;
use thiserror::Error;

type HmacSha512 = Hmac<Sha512>;

/// Header the service puts the signature in.
pub const SIGNATURE_HEADER: &str = "x-paystack-signature";

/// Length of a hex-encoded SHA-512 digest.
pub const SIGNATURE_HEX_LEN: usize = 128;

/// Signature computation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The MAC rejected the key.
    #[error("secret key cannot be used as an HMAC key")]
    InvalidKey,
}

/// Computes the signature the service would send for `payload`.
///
/// # Errors
///
/// Returns `SignatureError::InvalidKey` if the key is rejected by the MAC.
///
/// # Example
///
/// ```
/// use paystack_core::SecretKey;
/// use paystack_webhook::crypto::{sign, SIGNATURE_HEX_LEN};
///
/// let key = SecretKey::new("sk_test_abc").unwrap();
/// let signature = sign(b"{}", &key).unwrap();
/// assert_eq!(signature.len(), SIGNATURE_HEX_LEN);
/// ```
pub fn sign(payload: &[u8], secret: &SecretKey) -> Result<String, SignatureError> {
    let mut mac =
        HmacSha512::new_from_slice(secret.as_bytes()).map_err(|_| SignatureError::InvalidKey)?;

    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Checks that `provided` is exactly the lowercase hex signature of
/// `payload` under `secret`.
///
/// The comparison runs in constant time over the hex strings. Uppercase hex,
/// prefixes and surrounding whitespace do not match.
pub fn verify(payload: &[u8], provided: &str, secret: &SecretKey) -> bool {
    let Ok(expected) = sign(payload, secret) else {
        return false;
    };

    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

/// Reads the signature value from a transport header map.
///
/// Returns `None` when the header is absent or its value is not valid UTF-8.
pub fn signature_from_headers<'a>(headers: &'a HeaderMap, header_name: &str) -> Option<&'a str> {
    headers.get(header_name).and_then(|value| value.to_str().ok())
}
