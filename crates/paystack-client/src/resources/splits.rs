//! Transaction splits: share payments between the main account and
//! subaccounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    client::{ApiResponse, HttpClient},
    error::Result,
};

/// How shares are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// Shares are percentages of the amount.
    Percentage,
    /// Shares are fixed amounts in minor units.
    Flat,
}

/// Who pays the transaction fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BearerType {
    /// One subaccount, named by `bearer_subaccount`.
    Subaccount,
    /// The main account.
    Account,
    /// Everyone, proportional to their share.
    AllProportional,
    /// Everyone, equally.
    All,
}

/// Subaccount and its share in a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubaccountShare {
    /// Subaccount code (`ACCT_...`).
    pub subaccount: String,
    /// Percentage or flat amount, per the split type.
    pub share: u64,
}

/// Subaccount entry of a split as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSubaccount {
    /// Subaccount details.
    pub subaccount: Value,
    /// Percentage or flat amount, per the split type.
    pub share: u64,
}

/// Transaction split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Numeric split id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// How shares are expressed.
    #[serde(rename = "type")]
    pub split_type: SplitType,
    /// ISO currency code.
    pub currency: String,
    /// Integration id.
    pub integration: Option<u64>,
    /// `test` or `live`.
    pub domain: Option<String>,
    /// Split code (`SPL_...`).
    pub split_code: String,
    /// Whether the split can be used.
    pub active: Option<bool>,
    /// Who pays the transaction fee.
    pub bearer_type: BearerType,
    /// Subaccount paying the fee when `bearer_type` is `subaccount`.
    pub bearer_subaccount: Option<Value>,
    /// Creation time.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Subaccounts and their shares.
    #[serde(default)]
    pub subaccounts: Vec<SplitSubaccount>,
    /// Number of subaccounts.
    pub total_subaccounts: Option<u64>,
}

/// Parameters for [`Splits::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSplit {
    /// Display name.
    pub name: String,
    /// How shares are expressed.
    #[serde(rename = "type")]
    pub split_type: SplitType,
    /// ISO currency code.
    pub currency: String,
    /// Subaccounts and their shares.
    pub subaccounts: Vec<SubaccountShare>,
    /// Who pays the transaction fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_type: Option<BearerType>,
    /// Subaccount code paying the fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_subaccount: Option<String>,
}

/// Parameters for [`Splits::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListSplits {
    /// Only splits with this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only active or inactive splits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Records per page.
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page to fetch, 1-based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Start of the date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// End of the date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

/// Parameters for [`Splits::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSplit {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Enable or disable the split.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Who pays the transaction fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_type: Option<BearerType>,
    /// Subaccount code paying the fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_subaccount: Option<String>,
}

#[derive(Serialize)]
struct RemoveSubaccount<'a> {
    subaccount: &'a str,
}

/// Transaction splits resource.
#[derive(Debug, Clone, Copy)]
pub struct Splits<'a> {
    http: &'a HttpClient,
}

impl<'a> Splits<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Creates a split.
    pub async fn create(&self, params: &CreateSplit) -> Result<ApiResponse<Split>> {
        self.http.post(&["split"], params).await
    }

    /// Lists splits.
    pub async fn list(&self, params: &ListSplits) -> Result<ApiResponse<Vec<Split>>> {
        self.http.get_with_query(&["split"], params).await
    }

    /// Fetches a split by id.
    pub async fn fetch(&self, id: u64) -> Result<ApiResponse<Split>> {
        self.http.get(&["split", id.to_string().as_str()]).await
    }

    /// Updates a split's name, status or fee bearer.
    pub async fn update(&self, id: u64, params: &UpdateSplit) -> Result<ApiResponse<Split>> {
        self.http.put(&["split", id.to_string().as_str()], params).await
    }

    /// Adds a subaccount, or updates its share if already present.
    pub async fn add_subaccount(
        &self,
        id: u64,
        share: &SubaccountShare,
    ) -> Result<ApiResponse<Split>> {
        self.http.post(&["split", id.to_string().as_str(), "subaccount", "add"], share).await
    }

    /// Removes a subaccount from a split.
    pub async fn remove_subaccount(
        &self,
        id: u64,
        subaccount: &str,
    ) -> Result<ApiResponse<Value>> {
        let body = RemoveSubaccount { subaccount };
        self.http.post(&["split", id.to_string().as_str(), "subaccount", "remove"], &body).await
    }
}
