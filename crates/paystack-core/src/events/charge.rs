//! `charge.success` payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{null_as_default, Authorization, Customer, Plan};

/// A completed charge.
///
/// The service sends timestamps twice (`paid_at` and `paidAt`); only the
/// snake_case copy is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Numeric transaction id.
    pub id: u64,
    /// `test` or `live`.
    pub domain: String,
    /// Transaction status, `success` for this event.
    pub status: String,
    /// Merchant or generated transaction reference.
    pub reference: String,
    /// Amount charged in minor units.
    pub amount: i64,
    /// Processor message.
    pub message: Option<String>,
    /// Gateway response text, e.g. `Approved`.
    pub gateway_response: String,
    /// When the charge was paid.
    pub paid_at: Option<DateTime<Utc>>,
    /// When the transaction was created.
    pub created_at: Option<DateTime<Utc>>,
    /// Payment channel.
    pub channel: String,
    /// ISO currency code.
    pub currency: String,
    /// Customer IP address.
    pub ip_address: Option<String>,
    /// Metadata supplied at initialization; may be an object, a string or `0`.
    #[serde(default)]
    pub metadata: Value,
    /// Checkout interaction log.
    pub log: Option<Value>,
    /// Fees deducted in minor units.
    pub fees: Option<i64>,
    /// Fee breakdown for split payments.
    pub fees_split: Option<Value>,
    /// Paying customer.
    pub customer: Customer,
    /// Authorization used for the charge.
    pub authorization: Authorization,
    /// Plan the charge belongs to; empty when none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub plan: Plan,
    /// Subaccount settlement details.
    pub subaccount: Option<Value>,
    /// Split configuration applied.
    pub split: Option<Value>,
    /// Commerce order id.
    pub order_id: Option<Value>,
    /// Amount originally requested before fees were passed on.
    pub requested_amount: Option<i64>,
    /// Terminal data for POS transactions.
    pub pos_transaction_data: Option<Value>,
    /// Where the charge originated.
    pub source: Option<ChargeSource>,
}

impl Charge {
    /// Whether the charge was made against a subscription plan.
    pub fn is_subscription_charge(&self) -> bool {
        !self.plan.is_empty()
    }
}

/// Origin of a charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeSource {
    /// Source system, e.g. `merchant_api` or `checkout`.
    pub source: Option<String>,
    /// Source type, e.g. `api`.
    #[serde(rename = "type")]
    pub source_type: Option<String>,
    /// Identifier within the source system.
    pub identifier: Option<Value>,
    /// Entry point, e.g. `transaction_initialize`.
    pub entry_point: Option<String>,
}
