//! Transfer recipients: beneficiaries for payouts.

use paystack_core::events::TransferRecipient;
use serde::Serialize;
use serde_json::Value;

use super::ListParams;
use crate::{
    client::{ApiResponse, HttpClient},
    error::Result,
};

/// Parameters for [`Recipients::create`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateRecipient {
    /// `nuban`, `mobile_money`, `basa`, `authorization`...
    #[serde(rename = "type")]
    pub recipient_type: String,
    /// Recipient name.
    pub name: String,
    /// Destination account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Destination bank code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Authorization code for `authorization` recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl CreateRecipient {
    /// Nigerian bank account recipient.
    pub fn nuban(
        name: impl Into<String>,
        account_number: impl Into<String>,
        bank_code: impl Into<String>,
    ) -> Self {
        Self {
            recipient_type: "nuban".to_string(),
            name: name.into(),
            account_number: Some(account_number.into()),
            bank_code: Some(bank_code.into()),
            currency: Some("NGN".to_string()),
            ..Self::default()
        }
    }
}

/// Parameters for [`Recipients::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRecipient {
    /// New name.
    pub name: String,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Transfer recipients resource.
#[derive(Debug, Clone, Copy)]
pub struct Recipients<'a> {
    http: &'a HttpClient,
}

impl<'a> Recipients<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Creates a recipient.
    pub async fn create(&self, params: &CreateRecipient) -> Result<ApiResponse<TransferRecipient>> {
        self.http.post(&["transferrecipient"], params).await
    }

    /// Lists recipients.
    pub async fn list(&self, params: &ListParams) -> Result<ApiResponse<Vec<TransferRecipient>>> {
        self.http.get_with_query(&["transferrecipient"], params).await
    }

    /// Fetches a recipient by id or recipient code.
    pub async fn fetch(&self, id_or_code: &str) -> Result<ApiResponse<TransferRecipient>> {
        self.http.get(&["transferrecipient", id_or_code]).await
    }

    /// Updates a recipient's name or email.
    pub async fn update(
        &self,
        id_or_code: &str,
        params: &UpdateRecipient,
    ) -> Result<ApiResponse<Value>> {
        self.http.put(&["transferrecipient", id_or_code], params).await
    }

    /// Marks a recipient inactive.
    pub async fn delete(&self, id_or_code: &str) -> Result<ApiResponse<Value>> {
        self.http.delete(&["transferrecipient", id_or_code]).await
    }
}
