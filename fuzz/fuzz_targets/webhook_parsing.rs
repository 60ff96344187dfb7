#![no_main]

//! Fuzz target for delivery classification.
//!
//! Arbitrary bytes must classify into an event or a validation failure,
//! never a panic, and a failure must carry the reason matching its variant.

use libfuzzer_sys::fuzz_target;
use paystack_webhook::{classify, FailureReason, ValidationFailure};

fuzz_target!(|data: &[u8]| {
    match classify(data) {
        Ok(event) => {
            assert!(paystack_core::EventKind::ALL.contains(&event.kind()));
        },
        Err(failure) => {
            let expected = match &failure {
                ValidationFailure::MalformedBody { .. } => FailureReason::MalformedBody,
                ValidationFailure::UnknownEventKind { .. } => FailureReason::UnknownEventKind,
                ValidationFailure::SchemaMismatch { .. } => FailureReason::SchemaMismatch,
            };
            assert_eq!(failure.reason(), expected);
        },
    }
});
