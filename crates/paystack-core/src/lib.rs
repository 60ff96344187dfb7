//! Core types for the Paystack SDK.
//!
//! Provides the secret key wrapper, the domain models shared by webhook
//! payloads and API responses, and the closed catalog of webhook event kinds.
//! The webhook and client crates build on these types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod models;
pub mod secret;

pub use error::{CoreError, Result};
pub use events::{kinds, Event, EventKind, EventKindMarker};
pub use models::{Authorization, Bank, Customer, DedicatedAccount, Plan, RecipientDetails};
pub use secret::SecretKey;
