//! `invoice.*` payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Authorization, Customer};

/// Subscription invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// `test` or `live`.
    pub domain: String,
    /// Invoice code (`INV_...`).
    pub invoice_code: String,
    /// Amount due in minor units.
    pub amount: i64,
    /// Start of the billed period.
    pub period_start: DateTime<Utc>,
    /// End of the billed period.
    pub period_end: DateTime<Utc>,
    /// Invoice status.
    pub status: String,
    /// Whether the invoice has been paid.
    pub paid: bool,
    /// When it was paid.
    pub paid_at: Option<DateTime<Utc>>,
    /// Description.
    pub description: Option<String>,
    /// Authorization charged for the invoice.
    pub authorization: Authorization,
    /// Subscription being billed.
    pub subscription: InvoiceSubscription,
    /// Billed customer.
    pub customer: Customer,
    /// Transaction created for the charge attempt.
    pub transaction: Option<Value>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}

/// Subscription summary embedded in an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSubscription {
    pub status: String,
    pub subscription_code: String,
    pub email_token: Option<String>,
    pub amount: i64,
    pub cron_expression: Option<String>,
    pub next_payment_date: Option<DateTime<Utc>>,
    pub open_invoice: Option<String>,
}
