//! `transfer.*` payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::RecipientDetails;

/// Payout from the integration balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Amount in minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// `test` or `live`.
    pub domain: String,
    /// Failure details.
    pub failures: Option<Value>,
    /// Numeric transfer id.
    pub id: u64,
    /// Integration summary.
    pub integration: Option<Value>,
    /// Narration.
    pub reason: Option<String>,
    /// Merchant reference.
    pub reference: Option<String>,
    /// Funding source, `balance`.
    pub source: String,
    /// Source details.
    pub source_details: Option<Value>,
    /// `success`, `failed` or `reversed`.
    pub status: String,
    /// Processor code.
    pub titan_code: Option<String>,
    /// Transfer code (`TRF_...`).
    pub transfer_code: String,
    /// When funds left the balance.
    pub transferred_at: Option<DateTime<Utc>>,
    /// Beneficiary.
    pub recipient: TransferRecipient,
    /// Settlement session at the processor.
    pub session: Option<Value>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Beneficiary of a transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecipient {
    /// Whether the recipient is active.
    pub active: bool,
    /// ISO currency code.
    pub currency: String,
    /// Description.
    pub description: Option<String>,
    /// `test` or `live`.
    pub domain: String,
    /// Email address.
    pub email: Option<String>,
    /// Numeric recipient id.
    pub id: u64,
    /// Integration id.
    pub integration: Option<u64>,
    /// Free-form metadata.
    pub metadata: Option<Value>,
    /// Recipient name.
    pub name: String,
    /// Recipient code (`RCP_...`).
    pub recipient_code: String,
    /// `nuban`, `mobile_money`, `basa`, `authorization`...
    #[serde(rename = "type")]
    pub recipient_type: String,
    /// Whether the recipient was deleted.
    pub is_deleted: Option<bool>,
    /// Destination details.
    pub details: RecipientDetails,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}
