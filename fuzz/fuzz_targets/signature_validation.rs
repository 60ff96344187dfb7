#![no_main]

//! Fuzz target for signature verification.
//!
//! The first byte selects where the body starts; the bytes before it are
//! used as the provided signature. Verification must never panic, must
//! accept the body's own signature and must reject anything that differs
//! from it.

use http::{HeaderMap, HeaderValue};
use libfuzzer_sys::fuzz_target;
use paystack_core::SecretKey;
use paystack_webhook::{sign, signature_from_headers, verify, SIGNATURE_HEADER};

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = usize::from(split).min(rest.len());
    let (provided, body) = rest.split_at(split);
    let provided = String::from_utf8_lossy(provided);

    let Ok(secret) = SecretKey::new("sk_test_fuzz_signature_validation") else {
        return;
    };
    let Ok(expected) = sign(body, &secret) else {
        return;
    };

    assert!(verify(body, &expected, &secret));
    assert_eq!(verify(body, &provided, &secret), provided == expected.as_str());

    if !provided.is_ascii() {
        return;
    }
    if let Ok(value) = HeaderValue::from_str(&provided) {
        let mut headers = HeaderMap::new();
        headers.insert(SIGNATURE_HEADER, value);
        assert_eq!(signature_from_headers(&headers, SIGNATURE_HEADER), Some(provided.as_ref()));
    }
});
