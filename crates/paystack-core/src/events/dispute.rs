//! `charge.dispute.*` payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{null_as_default, Customer};

/// Dispute raised against a charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    /// Numeric dispute id.
    pub id: u64,
    /// Amount to be refunded if the dispute is accepted.
    pub refund_amount: Option<i64>,
    /// ISO currency code.
    pub currency: String,
    /// Dispute status, e.g. `awaiting-merchant-feedback`, `resolved`.
    pub status: String,
    /// Resolution once resolved, e.g. `merchant-accepted`, `declined`.
    pub resolution: Option<String>,
    /// `test` or `live`.
    pub domain: String,
    /// Disputed transaction.
    pub transaction: DisputeTransaction,
    /// Reference of the disputed transaction when sent separately.
    pub transaction_reference: Option<String>,
    /// `chargeback` or `fraud-claim`.
    pub category: Option<String>,
    /// Customer who raised the dispute.
    pub customer: Customer,
    /// Card BIN.
    pub bin: Option<String>,
    /// Last four card digits.
    pub last4: Option<String>,
    /// Deadline for the merchant's response.
    #[serde(rename = "dueAt")]
    pub due_at: Option<DateTime<Utc>>,
    /// When the dispute was resolved.
    #[serde(rename = "resolvedAt")]
    pub resolved_at: Option<DateTime<Utc>>,
    /// Evidence submitted by the merchant.
    pub evidence: Option<Value>,
    /// Uploaded attachments.
    pub attachments: Option<Value>,
    /// Merchant note.
    pub note: Option<Value>,
    /// Status history.
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<DisputeHistory>,
    /// Conversation between merchant and processor.
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<DisputeMessage>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Transaction a dispute refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeTransaction {
    /// Numeric transaction id.
    pub id: u64,
    /// Transaction reference.
    pub reference: String,
    /// Charged amount in minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Transaction status.
    pub status: String,
    /// `test` or `live`.
    pub domain: Option<String>,
    /// Gateway response text.
    pub gateway_response: Option<String>,
    /// Payment channel.
    pub channel: Option<String>,
    /// When the transaction was paid.
    pub paid_at: Option<DateTime<Utc>>,
    /// When the transaction was created.
    pub created_at: Option<DateTime<Utc>>,
}

/// Entry in a dispute's status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeHistory {
    /// Status entered.
    pub status: String,
    /// Actor that changed the status.
    pub by: Option<String>,
    /// When the status changed.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Message exchanged on a dispute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeMessage {
    /// Sender address.
    pub sender: Option<String>,
    /// Message text.
    pub body: Option<String>,
    /// When the message was sent.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Dispute {
    /// Whether the dispute has reached a resolution.
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some() || self.resolved_at.is_some()
    }
}
