//! Dedicated virtual accounts: bank accounts assigned to customers for
//! receiving transfers.

use paystack_core::DedicatedAccount;
use serde::{Deserialize, Serialize};

use crate::{
    client::{ApiResponse, HttpClient},
    error::Result,
};

/// Bank that can host dedicated accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Provider id.
    pub id: u64,
    /// Slug passed as `preferred_bank`.
    pub provider_slug: String,
    /// Bank id.
    pub bank_id: u64,
    /// Bank name.
    pub bank_name: String,
}

/// Parameters for [`DedicatedAccounts::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDedicatedAccount {
    /// Customer id or code.
    pub customer: String,
    /// Provider slug; the integration default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_bank: Option<String>,
    /// Subaccount code receiving payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    /// Split code applied to payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
    /// Customer first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Customer last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Customer phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Parameters for [`DedicatedAccounts::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListDedicatedAccounts {
    /// Only active or inactive accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Only accounts in this currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Only accounts at this provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_slug: Option<String>,
    /// Only accounts at this bank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<u64>,
    /// Only this customer's accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,
}

/// Dedicated virtual accounts resource.
#[derive(Debug, Clone, Copy)]
pub struct DedicatedAccounts<'a> {
    http: &'a HttpClient,
}

impl<'a> DedicatedAccounts<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Assigns a dedicated account to an existing customer.
    pub async fn create(
        &self,
        params: &CreateDedicatedAccount,
    ) -> Result<ApiResponse<DedicatedAccount>> {
        self.http.post(&["dedicated_account"], params).await
    }

    /// Lists dedicated accounts.
    pub async fn list(
        &self,
        params: &ListDedicatedAccounts,
    ) -> Result<ApiResponse<Vec<DedicatedAccount>>> {
        self.http.get_with_query(&["dedicated_account"], params).await
    }

    /// Fetches a dedicated account by id.
    pub async fn fetch(&self, id: u64) -> Result<ApiResponse<DedicatedAccount>> {
        self.http.get(&["dedicated_account", id.to_string().as_str()]).await
    }

    /// Deactivates a dedicated account.
    pub async fn deactivate(&self, id: u64) -> Result<ApiResponse<DedicatedAccount>> {
        self.http.delete(&["dedicated_account", id.to_string().as_str()]).await
    }

    /// Banks that can host dedicated accounts.
    pub async fn available_providers(&self) -> Result<ApiResponse<Vec<Provider>>> {
        self.http.get(&["dedicated_account", "available_providers"]).await
    }
}
