//! Transactions: accept payments and inspect their outcome.

use chrono::{DateTime, Utc};
use paystack_core::{Authorization, Customer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{empty_object_as_none, ListParams};
use crate::{
    client::{ApiResponse, HttpClient},
    error::Result,
};

/// Transaction as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Numeric transaction id.
    pub id: u64,
    /// `test` or `live`.
    pub domain: Option<String>,
    /// `success`, `failed`, `abandoned`, `ongoing`...
    pub status: String,
    /// Merchant reference.
    pub reference: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Status message.
    pub message: Option<String>,
    /// Response from the processor.
    pub gateway_response: Option<String>,
    /// Settlement time for successful transactions.
    pub paid_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Payment channel.
    pub channel: Option<String>,
    /// ISO currency code.
    pub currency: String,
    /// Customer IP address.
    pub ip_address: Option<String>,
    /// Free-form metadata.
    pub metadata: Option<Value>,
    /// Fees charged in minor units.
    pub fees: Option<i64>,
    /// Paying customer.
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub customer: Option<Customer>,
    /// Authorization used, absent for abandoned transactions.
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub authorization: Option<Authorization>,
    /// Plan the transaction belongs to.
    pub plan: Option<Value>,
    /// Amount requested before fees or discounts.
    pub requested_amount: Option<i64>,
}

impl Transaction {
    /// Whether the payment went through.
    pub fn is_successful(&self) -> bool {
        self.status == "success"
    }
}

/// Parameters for [`Transactions::initialize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InitializeTransaction {
    /// Customer email address.
    pub email: String,
    /// Amount in minor units.
    pub amount: i64,
    /// ISO currency code; defaults to the integration currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Merchant reference; generated when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// URL the customer returns to after paying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Plan code to subscribe the customer to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Channels offered on checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    /// Split code to share the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
    /// Subaccount code receiving a share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Checkout session created by [`Transactions::initialize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializedTransaction {
    /// URL to redirect the customer to.
    pub authorization_url: String,
    /// Access code for inline checkout.
    pub access_code: String,
    /// Transaction reference.
    pub reference: String,
}

/// Parameters for [`Transactions::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListTransactions {
    /// Records per page.
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page to fetch, 1-based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Only this customer's transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,
    /// Only transactions in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Only transactions of this amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Start of the date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// End of the date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

/// Parameters for [`Transactions::charge_authorization`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChargeAuthorization {
    /// Email address the authorization belongs to.
    pub email: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Reusable authorization code.
    pub authorization_code: String,
    /// Merchant reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Amount in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    /// ISO currency code.
    pub currency: String,
    /// Amount in minor units.
    pub amount: i64,
}

/// Aggregates returned by [`Transactions::totals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTotals {
    /// Number of transactions.
    pub total_transactions: u64,
    /// Number of distinct paying customers.
    pub unique_customers: Option<u64>,
    /// Volume across all currencies.
    pub total_volume: i64,
    /// Volume per currency.
    #[serde(default)]
    pub total_volume_by_currency: Vec<CurrencyAmount>,
    /// Amount awaiting settlement.
    pub pending_transfers: i64,
    /// Pending amount per currency.
    #[serde(default)]
    pub pending_transfers_by_currency: Vec<CurrencyAmount>,
}

/// Transactions resource.
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    http: &'a HttpClient,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Creates a checkout session.
    pub async fn initialize(
        &self,
        params: &InitializeTransaction,
    ) -> Result<ApiResponse<InitializedTransaction>> {
        self.http.post(&["transaction", "initialize"], params).await
    }

    /// Confirms the outcome of a transaction by reference.
    pub async fn verify(&self, reference: &str) -> Result<ApiResponse<Transaction>> {
        self.http.get(&["transaction", "verify", reference]).await
    }

    /// Lists transactions.
    pub async fn list(&self, params: &ListTransactions) -> Result<ApiResponse<Vec<Transaction>>> {
        self.http.get_with_query(&["transaction"], params).await
    }

    /// Fetches one transaction by id.
    pub async fn fetch(&self, id: u64) -> Result<ApiResponse<Transaction>> {
        self.http.get(&["transaction", id.to_string().as_str()]).await
    }

    /// Charges a saved authorization.
    pub async fn charge_authorization(
        &self,
        params: &ChargeAuthorization,
    ) -> Result<ApiResponse<Transaction>> {
        self.http.post(&["transaction", "charge_authorization"], params).await
    }

    /// Totals over a date window.
    pub async fn totals(&self, params: &ListParams) -> Result<ApiResponse<TransactionTotals>> {
        self.http.get_with_query(&["transaction", "totals"], params).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn abandoned_transaction_decodes_without_authorization() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": 3188474817_u64,
            "domain": "test",
            "status": "abandoned",
            "reference": "nms6uvr1pl",
            "amount": 20000,
            "message": null,
            "gateway_response": "The transaction was not completed",
            "paid_at": null,
            "created_at": "2023-10-04T10:02:12.000Z",
            "channel": "card",
            "currency": "NGN",
            "ip_address": null,
            "metadata": "",
            "fees": null,
            "customer": {
                "id": 145380218,
                "first_name": null,
                "last_name": null,
                "email": "abandoned@example.com",
                "customer_code": "CUS_lc6ns1hs4yq6c3p",
                "phone": null,
                "metadata": null,
                "risk_action": "default"
            },
            "authorization": {},
            "plan": {},
            "requested_amount": 20000
        }))
        .unwrap();

        assert!(!transaction.is_successful());
        assert!(transaction.authorization.is_none());
        assert_eq!(transaction.customer.unwrap().email, "abandoned@example.com");
    }

    #[test]
    fn initialize_omits_unset_fields() {
        let params = InitializeTransaction {
            email: "customer@email.com".into(),
            amount: 20000,
            ..InitializeTransaction::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "email": "customer@email.com", "amount": 20000 })
        );
    }
}
