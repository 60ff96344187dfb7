//! Client for the Paystack REST API.
//!
//! [`HttpClient`] exchanges authenticated JSON requests and validates the
//! response envelope; the [`resources`] modules map endpoints onto typed
//! parameters and responses; [`Paystack`] wires one secret key to all of
//! them and to the webhook processor.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod paystack;
pub mod resources;

pub use client::{decode_envelope, ApiResponse, ClientConfig, HttpClient, Meta};
pub use config::Config;
pub use error::{ApiError, ErrorCategory, Result};
pub use paystack::Paystack;
pub use resources::ListParams;
