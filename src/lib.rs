//! Paystack SDK.
//!
//! Re-exports the workspace crates under one name:
//!
//! - [`types`]: secret key, shared models and the webhook event catalog.
//! - [`webhook`]: signature verification, classification and dispatch of
//!   inbound deliveries.
//! - [`client`]: the REST API client and its configuration.
//!
//! ```no_run
//! use paystack::{kinds, Config, Paystack};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut paystack = Paystack::from_config(&Config::load()?)?;
//!
//! paystack.webhooks_mut().on(kinds::ChargeSuccess, |charge| async move {
//!     println!("received {} {}", charge.amount, charge.currency);
//!     Ok(())
//! });
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use paystack_client as client;
pub use paystack_client::{ApiError, ApiResponse, Config, Paystack};
pub use paystack_core as types;
pub use paystack_core::{kinds, Event, EventKind, EventKindMarker, SecretKey};
pub use paystack_webhook as webhook;
pub use paystack_webhook::{WebhookError, WebhookProcessor};
