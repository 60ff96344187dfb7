//! `paymentrequest.*` payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::null_as_default;

/// Payment request (invoice sent to a customer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Numeric request id.
    pub id: u64,
    /// `test` or `live`.
    pub domain: String,
    /// Requested amount in minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Payment due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Whether an invoice number was generated.
    pub has_invoice: bool,
    /// Invoice number.
    pub invoice_number: Option<u64>,
    /// Description.
    pub description: Option<String>,
    /// Link to the PDF rendering.
    pub pdf_url: Option<String>,
    /// Line items.
    #[serde(default, deserialize_with = "null_as_default")]
    pub line_items: Vec<Value>,
    /// Tax lines.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tax: Vec<Value>,
    /// Request code (`PRQ_...`).
    pub request_code: String,
    /// Request status.
    pub status: String,
    /// Whether the request has been paid.
    pub paid: bool,
    /// When it was paid.
    pub paid_at: Option<DateTime<Utc>>,
    /// Free-form metadata.
    pub metadata: Option<Value>,
    /// Notifications sent to the customer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: Vec<Value>,
    /// Reference for offline payment.
    pub offline_reference: Option<String>,
    /// Numeric id of the customer the request was sent to.
    pub customer: u64,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}
