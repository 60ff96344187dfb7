//! Inbound webhook processing for Paystack deliveries.
//!
//! Authenticates a delivery with HMAC-SHA512 over the raw body, classifies it
//! into one of the catalog's event kinds, validates the payload against that
//! kind's shape and dispatches it to the handler registered for the kind.
//!
//! ```
//! use paystack_core::{kinds, SecretKey};
//! use paystack_webhook::{sign, WebhookProcessor};
//!
//! let secret = SecretKey::new("sk_test_example")?;
//! let mut processor = WebhookProcessor::new(secret.clone());
//! processor.on(kinds::TransferSuccess, |transfer| async move {
//!     println!("paid out {}", transfer.amount);
//!     Ok(())
//! });
//!
//! let body = br#"{"event":"some.unknown.kind","data":{}}"#;
//! let signature = sign(body, &secret)?;
//! let err = futures::executor::block_on(processor.process(body, Some(&signature))).unwrap_err();
//! assert!(err.is_forward_compatible());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod crypto;
pub mod error;
pub mod processor;
pub mod registry;

pub use classify::classify;
pub use crypto::{sign, signature_from_headers, verify, SignatureError, SIGNATURE_HEADER};
pub use error::{FailureReason, Result, ValidationFailure, WebhookError};
pub use processor::{ProcessingStage, WebhookProcessor};
pub use registry::{DispatchOutcome, HandlerError, HandlerRegistry, HandlerResult};
