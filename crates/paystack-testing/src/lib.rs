//! Test infrastructure for the Paystack SDK.
//!
//! Provides signed delivery builders, a valid body for every catalog event
//! kind, and a wiremock-backed stand-in for the REST API.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod delivery;
pub mod fixtures;
pub mod mock;

pub use delivery::{test_secret, Delivery, DeliveryBuilder, TEST_SECRET_KEY};
pub use mock::{envelope, ApiMock, MockEndpoint};
