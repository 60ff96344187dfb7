//! Signed delivery builders.

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use paystack_core::{EventKind, SecretKey};
use paystack_webhook::{sign, SIGNATURE_HEADER};
use serde_json::Value;

use crate::fixtures;

/// Secret key used to sign deliveries unless another is set.
pub const TEST_SECRET_KEY: &str = "sk_test_8b5f0a2c9d1e4f7a6b3c8d2e1f0a9b4c";

/// Returns [`TEST_SECRET_KEY`] as a [`SecretKey`].
#[allow(clippy::expect_used)]
pub fn test_secret() -> SecretKey {
    SecretKey::new(TEST_SECRET_KEY).expect("test key is not empty")
}

#[derive(Debug, Clone)]
enum SignatureMode {
    Computed,
    Tampered,
    Custom(String),
    Absent,
}

/// Builder for a delivery body and the signature it is sent with.
#[derive(Debug, Clone)]
pub struct DeliveryBuilder {
    body: Bytes,
    secret: SecretKey,
    signature: SignatureMode,
}

impl DeliveryBuilder {
    /// Starts from raw body bytes, signed with the test key.
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into(), secret: test_secret(), signature: SignatureMode::Computed }
    }

    /// Starts from the fixture body of `kind`.
    pub fn event(kind: EventKind) -> Self {
        Self::json(&fixtures::event_body(kind))
    }

    /// Starts from a JSON value, serialized compactly.
    pub fn json(value: &Value) -> Self {
        Self::new(value.to_string())
    }

    /// Signs with `secret` instead of the test key.
    #[must_use]
    pub fn secret(mut self, secret: SecretKey) -> Self {
        self.secret = secret;
        self
    }

    /// Sends `signature` verbatim.
    #[must_use]
    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = SignatureMode::Custom(signature.into());
        self
    }

    /// Sends the correct signature with its first hex digit changed.
    #[must_use]
    pub fn tampered_signature(mut self) -> Self {
        self.signature = SignatureMode::Tampered;
        self
    }

    /// Sends no signature.
    #[must_use]
    pub fn without_signature(mut self) -> Self {
        self.signature = SignatureMode::Absent;
        self
    }

    /// Builds the delivery.
    pub fn build(self) -> Delivery {
        let signature = match self.signature {
            SignatureMode::Computed => Some(compute(&self.body, &self.secret)),
            SignatureMode::Tampered => Some(flip_first_digit(&compute(&self.body, &self.secret))),
            SignatureMode::Custom(signature) => Some(signature),
            SignatureMode::Absent => None,
        };

        Delivery { body: self.body, signature }
    }
}

#[allow(clippy::expect_used)]
fn compute(body: &[u8], secret: &SecretKey) -> String {
    sign(body, secret).expect("HMAC accepts keys of any length")
}

fn flip_first_digit(signature: &str) -> String {
    let mut chars: Vec<char> = signature.chars().collect();
    if let Some(first) = chars.first_mut() {
        *first = if *first == '0' { '1' } else { '0' };
    }
    chars.into_iter().collect()
}

/// A body and the signature value it arrives with.
#[derive(Debug, Clone)]
pub struct Delivery {
    /// Exact body bytes.
    pub body: Bytes,
    /// Signature header value; `None` when the header is omitted.
    pub signature: Option<String>,
}

impl Delivery {
    /// Signature as the processor receives it.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Transport headers carrying the signature, as a server would see them.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(value) = self.signature().and_then(|s| HeaderValue::from_str(s).ok()) {
            headers.insert(SIGNATURE_HEADER, value);
        }
        headers
    }
}
