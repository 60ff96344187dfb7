//! Transfers: pay out from the integration balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    client::{ApiResponse, HttpClient},
    error::Result,
};

/// Transfer as returned by the API.
///
/// `recipient` is the numeric recipient id on creation and the full recipient
/// object when fetched, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Numeric transfer id.
    pub id: u64,
    /// Integration id.
    pub integration: Option<u64>,
    /// `test` or `live`.
    pub domain: Option<String>,
    /// Amount in minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Funding source, `balance`.
    pub source: Option<String>,
    /// Narration.
    pub reason: Option<String>,
    /// Beneficiary id or object.
    pub recipient: Value,
    /// `pending`, `otp`, `success`, `failed`, `reversed`.
    pub status: String,
    /// Transfer code (`TRF_...`).
    pub transfer_code: String,
    /// Merchant reference.
    pub reference: Option<String>,
    /// When funds left the balance.
    pub transferred_at: Option<DateTime<Utc>>,
    /// Creation time.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TransferRecord {
    /// Whether the transfer waits for an OTP to be finalized.
    pub fn requires_otp(&self) -> bool {
        self.status == "otp"
    }
}

/// Parameters for [`Transfers::initiate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitiateTransfer {
    /// Funding source; only `balance` is supported.
    pub source: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Recipient code (`RCP_...`).
    pub recipient: String,
    /// Narration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Merchant reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl InitiateTransfer {
    /// Transfer of `amount` from the balance to `recipient`.
    pub fn from_balance(amount: i64, recipient: impl Into<String>) -> Self {
        Self {
            source: "balance".to_string(),
            amount,
            recipient: recipient.into(),
            reason: None,
            currency: None,
            reference: None,
        }
    }
}

/// Parameters for [`Transfers::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalizeTransfer {
    /// Transfer code returned on initiation.
    pub transfer_code: String,
    /// OTP sent to the business phone.
    pub otp: String,
}

/// Parameters for [`Transfers::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListTransfers {
    /// Records per page.
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page to fetch, 1-based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Only transfers to this recipient id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<u64>,
    /// Start of the date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// End of the date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

/// Transfers resource.
#[derive(Debug, Clone, Copy)]
pub struct Transfers<'a> {
    http: &'a HttpClient,
}

impl<'a> Transfers<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Starts a transfer.
    pub async fn initiate(&self, params: &InitiateTransfer) -> Result<ApiResponse<TransferRecord>> {
        self.http.post(&["transfer"], params).await
    }

    /// Completes a transfer that is waiting for an OTP.
    pub async fn finalize(&self, params: &FinalizeTransfer) -> Result<ApiResponse<TransferRecord>> {
        self.http.post(&["transfer", "finalize_transfer"], params).await
    }

    /// Fetches a transfer by id or transfer code.
    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse<TransferRecord>> {
        self.http.get(&["transfer", id_or_code]).await
    }

    /// Looks up a transfer by merchant reference.
    pub async fn verify(&self, reference: &str) -> Result<ApiResponse<TransferRecord>> {
        self.http.get(&["transfer", "verify", reference]).await
    }

    /// Lists transfers.
    pub async fn list(&self, params: &ListTransfers) -> Result<ApiResponse<Vec<TransferRecord>>> {
        self.http.get_with_query(&["transfer"], params).await
    }
}
