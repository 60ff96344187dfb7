//! Property-based tests for webhook processing invariants.
//!
//! These tests use randomly generated inputs to verify that the gates hold
//! for every catalog kind, regardless of key material or extra payload
//! fields.

#![allow(clippy::unwrap_used)]

use paystack::{
    webhook::{classify, sign, verify, FailureReason},
    EventKind, SecretKey, WebhookProcessor,
};
use paystack_testing::{fixtures, test_secret};
use proptest::prelude::*;
use serde_json::{json, Value};
use tokio::runtime::Runtime;

/// Creates property test configuration based on environment.
///
/// Uses environment variables:
/// - `PROPTEST_CASES`: Number of test cases (default: 20 for dev, 100 for CI)
/// - `CI`: If set to "true", uses CI configuration
fn proptest_config() -> ProptestConfig {
    let is_ci = std::env::var("CI").unwrap_or_default() == "true";
    let default_cases = if is_ci { 100 } else { 20 };

    let cases =
        std::env::var("PROPTEST_CASES").ok().and_then(|s| s.parse().ok()).unwrap_or(default_cases);

    ProptestConfig::with_cases(cases)
}

fn any_kind() -> impl Strategy<Value = EventKind> {
    (0..EventKind::ALL.len()).prop_map(|index| EventKind::ALL[index])
}

fn secret_key() -> impl Strategy<Value = SecretKey> {
    "sk_(test|live)_[a-z0-9]{8,40}".prop_map(|key| SecretKey::new(key).unwrap())
}

fn extra_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,24}".prop_map(Value::from),
        prop::collection::vec(any::<u16>(), 0..4).prop_map(|items| json!(items)),
    ]
}

/// Adds `field` to the payload object, or to every object of a list payload.
fn with_extra_field(kind: EventKind, field: &str, value: Value) -> Value {
    let mut body = fixtures::event_body(kind);
    match &mut body["data"] {
        Value::Object(data) => {
            data.insert(field.to_string(), value);
        },
        Value::Array(items) => {
            for item in items.iter_mut().filter_map(Value::as_object_mut) {
                item.insert(field.to_string(), value.clone());
            }
        },
        _ => {},
    }
    body
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Unknown payload fields never change the classification.
    #[test]
    fn extra_fields_are_tolerated(
        kind in any_kind(),
        field in "zz_[a-z_]{1,16}",
        value in extra_value(),
    ) {
        let body = serde_json::to_vec(&with_extra_field(kind, &field, value)).unwrap();

        let event = classify(&body).unwrap();

        prop_assert_eq!(event.kind(), kind);
        let reference = classify(&fixtures::event_bytes(kind)).unwrap();
        prop_assert_eq!(event, reference);
    }

    /// A signature made with one key never verifies under another.
    #[test]
    fn signatures_are_bound_to_their_key(
        kind in any_kind(),
        signer in secret_key(),
        verifier in secret_key(),
    ) {
        prop_assume!(signer.expose() != verifier.expose());
        let body = fixtures::event_bytes(kind);

        let signature = sign(&body, &signer).unwrap();

        prop_assert!(verify(&body, &signature, &signer));
        prop_assert!(!verify(&body, &signature, &verifier));
    }

    /// Any correctly signed catalog delivery is accepted as its own kind;
    /// dropping the signature always fails before classification.
    #[test]
    fn signed_catalog_deliveries_are_accepted(kind in any_kind()) {
        let runtime = Runtime::new().unwrap();
        let secret = test_secret();
        let processor = WebhookProcessor::new(secret.clone());
        let body = fixtures::event_bytes(kind);
        let signature = sign(&body, &secret).unwrap();

        let event = runtime.block_on(processor.process(&body, Some(&signature))).unwrap();
        prop_assert_eq!(event.kind(), kind);

        let err = runtime.block_on(processor.process(&body, None)).unwrap_err();
        prop_assert_eq!(err.reason(), FailureReason::MissingSignature);
    }

    /// Renaming the discriminator to any tag outside the catalog is reported
    /// as an unknown kind, never as another kind's data.
    #[test]
    fn tags_outside_the_catalog_are_unknown(
        kind in any_kind(),
        tag in "[a-z]{3,12}\\.[a-z_]{3,12}",
    ) {
        prop_assume!(EventKind::from_tag(&tag).is_none());
        let mut body = fixtures::event_body(kind);
        body["event"] = Value::from(tag);

        let failure = classify(&serde_json::to_vec(&body).unwrap()).unwrap_err();

        prop_assert_eq!(failure.reason(), FailureReason::UnknownEventKind);
    }
}
