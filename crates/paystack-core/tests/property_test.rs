//! Property-based tests for the event kind catalog.

#![allow(clippy::unwrap_used)]

use paystack_core::{EventKind, SecretKey};
use proptest::{prelude::*, test_runner::Config as ProptestConfig};

fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES").ok().and_then(|s| s.parse().ok()).unwrap_or(64);
    ProptestConfig { cases, failure_persistence: None, ..ProptestConfig::default() }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Lookup succeeds exactly for catalog tags.
    #[test]
    fn tag_lookup_matches_catalog(tag in "[a-z_.]{0,40}") {
        let listed = EventKind::ALL.iter().any(|kind| kind.as_str() == tag);
        prop_assert_eq!(EventKind::from_tag(&tag).is_some(), listed);
    }

    /// Any chosen kind survives display and parse.
    #[test]
    fn display_parse_round_trip(index in 0..EventKind::ALL.len()) {
        let kind = EventKind::ALL[index];
        prop_assert_eq!(kind.to_string().parse::<EventKind>().unwrap(), kind);
    }

    /// Secret keys are never rendered by Debug.
    #[test]
    fn secret_key_debug_is_redacted(key in "sk_(test|live)_[a-zA-Z0-9]{8,40}") {
        let secret = SecretKey::new(key.clone()).unwrap();
        let rendered = format!("{secret:?}");
        prop_assert!(!rendered.contains(&key));
    }
}
