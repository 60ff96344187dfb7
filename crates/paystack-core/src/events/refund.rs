//! `refund.*` payloads.

use serde::{Deserialize, Serialize};

/// Refund of a previous transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    /// Refund status: `pending`, `processing`, `processed` or `failed`.
    pub status: String,
    /// Reference of the refunded transaction.
    pub transaction_reference: String,
    /// Refund reference assigned by the processor.
    pub refund_reference: Option<String>,
    /// Refunded amount in minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Processor handling the refund.
    pub processor: Option<String>,
    /// Refunded customer.
    pub customer: RefundCustomer,
    /// Integration id.
    pub integration: Option<u64>,
    /// `test` or `live`.
    pub domain: String,
}

/// Customer summary on refund events. Carries no id or code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundCustomer {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: String,
}
