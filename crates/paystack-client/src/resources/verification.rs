//! Verification: resolve account numbers and card BINs, list banks.

use serde::{Deserialize, Serialize};

use crate::{
    client::{ApiResponse, HttpClient},
    error::Result,
};

/// Account holder resolved from an account number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAccount {
    /// Account number as resolved.
    pub account_number: String,
    /// Registered account name.
    pub account_name: String,
    /// Bank id.
    pub bank_id: Option<u64>,
}

/// Card details resolved from the first six digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBin {
    /// The BIN queried.
    pub bin: String,
    /// Card brand.
    pub brand: Option<String>,
    /// Card sub-brand.
    pub sub_brand: Option<String>,
    /// ISO country code of the issuer.
    pub country_code: Option<String>,
    /// Country name of the issuer.
    pub country_name: Option<String>,
    /// `DEBIT` or `CREDIT`.
    pub card_type: Option<String>,
    /// Issuing bank.
    pub bank: Option<String>,
    /// Issuing bank id.
    pub linked_bank_id: Option<u64>,
}

/// Bank supported for transfers or payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankListing {
    /// Numeric bank id.
    pub id: u64,
    /// Bank name.
    pub name: String,
    /// Bank slug.
    pub slug: String,
    /// Bank code used when creating recipients.
    pub code: String,
    /// Long bank code.
    pub longcode: Option<String>,
    /// Gateway serving the bank.
    pub gateway: Option<String>,
    /// Whether customers can pay with this bank.
    pub pay_with_bank: Option<bool>,
    /// Whether the bank is available.
    pub active: bool,
    /// Country name.
    pub country: String,
    /// ISO currency code.
    pub currency: String,
    /// `nuban`, `mobile_money`, `ghipss`...
    #[serde(rename = "type")]
    pub bank_type: Option<String>,
    /// Whether the bank was removed.
    pub is_deleted: Option<bool>,
}

/// Parameters for [`Verification::list_banks`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListBanks {
    /// Country name, e.g. `nigeria`, `ghana`, `kenya`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Only banks supporting this currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Only banks of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub bank_type: Option<String>,
    /// Only banks customers can pay with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_with_bank: Option<bool>,
    /// Use cursor pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cursor: Option<bool>,
    /// Records per page.
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Cursor of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Cursor of the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

#[derive(Serialize)]
struct ResolveAccountQuery<'a> {
    account_number: &'a str,
    bank_code: &'a str,
}

/// Verification resource.
#[derive(Debug, Clone, Copy)]
pub struct Verification<'a> {
    http: &'a HttpClient,
}

impl<'a> Verification<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Resolves the holder of an account number at a bank.
    pub async fn resolve_account(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<ApiResponse<ResolvedAccount>> {
        let query = ResolveAccountQuery { account_number, bank_code };
        self.http.get_with_query(&["bank", "resolve"], &query).await
    }

    /// Resolves card details from the first six digits.
    pub async fn resolve_card_bin(&self, bin: &str) -> Result<ApiResponse<CardBin>> {
        self.http.get(&["decision", "bin", bin]).await
    }

    /// Lists banks.
    pub async fn list_banks(&self, params: &ListBanks) -> Result<ApiResponse<Vec<BankListing>>> {
        self.http.get_with_query(&["bank"], params).await
    }
}
