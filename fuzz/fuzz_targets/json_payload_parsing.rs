#![no_main]

//! Fuzz target for event re-serialization.
//!
//! Any body that classifies must serialize back into a delivery body that
//! classifies into an equal event.

use libfuzzer_sys::fuzz_target;
use paystack_webhook::classify;

fuzz_target!(|data: &[u8]| {
    let Ok(event) = classify(data) else {
        return;
    };

    let body = match event.to_body() {
        Ok(body) => body,
        Err(e) => panic!("classified event failed to serialize: {e}"),
    };
    let reclassified = match classify(&body) {
        Ok(event) => event,
        Err(e) => panic!("re-serialized {} body rejected: {e}", event.kind()),
    };

    assert_eq!(reclassified, event);
});
