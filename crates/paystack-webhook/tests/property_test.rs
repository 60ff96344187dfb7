//! Property-based tests for signature verification and classification.

#![allow(clippy::unwrap_used)]

use paystack_core::{EventKind, SecretKey};
use paystack_testing::fixtures;
use paystack_webhook::{classify, sign, verify, WebhookError, WebhookProcessor};
use proptest::{prelude::*, test_runner::Config as ProptestConfig};
use serde_json::{Map, Value};

/// Property test configuration; `PROPTEST_CASES` overrides the case count.
fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES").ok().and_then(|s| s.parse().ok()).unwrap_or(128);
    ProptestConfig { cases, failure_persistence: None, ..ProptestConfig::default() }
}

fn secret_strategy() -> impl Strategy<Value = SecretKey> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|key| SecretKey::new(key).unwrap())
}

fn flip_hex_digit(signature: &str, index: usize) -> String {
    signature
        .char_indices()
        .map(|(i, c)| if i == index { if c == 'f' { '0' } else { 'f' } } else { c })
        .collect()
}

/// What happens to one optional field of a fixture payload.
#[derive(Debug, Clone, Copy)]
enum FieldEdit {
    Keep,
    Remove,
    Null,
}

fn field_edit() -> impl Strategy<Value = FieldEdit> {
    prop_oneof![Just(FieldEdit::Keep), Just(FieldEdit::Remove), Just(FieldEdit::Null)]
}

/// A catalog kind paired with one edit per optional field of its payload.
fn edited_delivery() -> impl Strategy<Value = (EventKind, Vec<FieldEdit>)> {
    (0..EventKind::ALL.len()).prop_flat_map(|index| {
        let kind = EventKind::ALL[index];
        let edits = fixtures::optional_fields(kind).len();
        (Just(kind), prop::collection::vec(field_edit(), edits))
    })
}

fn apply_edits(object: &mut Map<String, Value>, fields: &[&str], edits: &[FieldEdit]) {
    for (field, edit) in fields.iter().zip(edits) {
        match edit {
            FieldEdit::Keep => {},
            FieldEdit::Remove => {
                object.remove(*field);
            },
            FieldEdit::Null => {
                object.insert((*field).to_string(), Value::Null);
            },
        }
    }
}

fn edited_body(kind: EventKind, edits: &[FieldEdit]) -> Vec<u8> {
    let fields = fixtures::optional_fields(kind);
    let mut body = fixtures::event_body(kind);
    match &mut body["data"] {
        Value::Object(data) => apply_edits(data, fields, edits),
        Value::Array(cards) => {
            for card in cards.iter_mut().filter_map(Value::as_object_mut) {
                apply_edits(card, fields, edits);
            }
        },
        _ => {},
    }
    body.to_string().into_bytes()
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn own_signature_always_verifies(
        body in prop::collection::vec(any::<u8>(), 0..2048),
        secret in secret_strategy(),
    ) {
        let signature = sign(&body, &secret).unwrap();
        prop_assert!(verify(&body, &signature, &secret));
    }

    #[test]
    fn any_single_digit_change_fails(
        body in prop::collection::vec(any::<u8>(), 0..512),
        secret in secret_strategy(),
        index in 0usize..128,
    ) {
        let signature = sign(&body, &secret).unwrap();
        let flipped = flip_hex_digit(&signature, index);
        prop_assert_ne!(&flipped, &signature);
        prop_assert!(!verify(&body, &flipped, &secret));
    }

    #[test]
    fn classify_never_panics(body in prop::collection::vec(any::<u8>(), 0..1024)) {
        let _ = classify(&body);
    }

    #[test]
    fn unsigned_delivery_is_always_missing_signature(
        body in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let processor = WebhookProcessor::new(SecretKey::new("sk_test_prop").unwrap());
        let err = futures::executor::block_on(processor.process(&body, None)).unwrap_err();
        prop_assert!(matches!(err, WebhookError::MissingSignature));
    }

    #[test]
    fn payload_round_trips_through_reclassification(index in 0..EventKind::ALL.len()) {
        let kind = EventKind::ALL[index];
        let event = classify(&fixtures::event_bytes(kind)).unwrap();

        let reclassified = classify(&event.to_body().unwrap()).unwrap();
        prop_assert_eq!(reclassified.kind(), kind);
        prop_assert_eq!(reclassified, event);
    }

    #[test]
    fn optional_fields_absent_or_null_still_classify(
        (kind, edits) in edited_delivery(),
    ) {
        let event = classify(&edited_body(kind, &edits));
        prop_assert!(event.is_ok(), "{} {:?}: {:?}", kind, edits, event);
        let event = event.unwrap();

        let reclassified = classify(&event.to_body().unwrap()).unwrap();
        prop_assert_eq!(reclassified.kind(), kind);
        prop_assert_eq!(reclassified, event);
    }
}
