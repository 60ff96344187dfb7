//! `customeridentification.*` payloads.

use serde::{Deserialize, Serialize};

/// Outcome of validating a customer's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerIdentification {
    /// Customer id, sent as a string.
    pub customer_id: String,
    /// Customer code (`CUS_...`).
    pub customer_code: String,
    /// Customer email.
    pub email: String,
    /// Identification submitted.
    pub identification: Identification,
    /// Failure reason, present on `customeridentification.failed`.
    pub reason: Option<String>,
}

/// Identity document used for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    /// ISO country code.
    pub country: String,
    /// Identification type, e.g. `bank_account` or `bvn`.
    #[serde(rename = "type")]
    pub id_type: String,
    /// Masked BVN.
    pub bvn: Option<String>,
    /// Masked account number.
    pub account_number: Option<String>,
    /// Bank code.
    pub bank_code: Option<String>,
    /// Identification value for other document types.
    pub value: Option<String>,
}
