//! Resource modules of the REST API.
//!
//! Each resource is a thin handle borrowing the shared [`HttpClient`]; its
//! methods map one-to-one onto endpoints and return the decoded
//! [`ApiResponse`](crate::ApiResponse).
//!
//! [`HttpClient`]: crate::HttpClient

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub mod dedicated_accounts;
pub mod recipients;
pub mod splits;
pub mod transactions;
pub mod transfers;
pub mod verification;

pub use dedicated_accounts::DedicatedAccounts;
pub use recipients::Recipients;
pub use splits::Splits;
pub use transactions::Transactions;
pub use transfers::Transfers;
pub use verification::Verification;

/// Pagination and date window shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
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

impl ListParams {
    /// Requests `page` with `per_page` records.
    pub fn page(page: u32, per_page: u32) -> Self {
        Self { per_page: Some(per_page), page: Some(page), ..Self::default() }
    }
}

/// Reads an object that the service sends as `{}` when it has nothing to say.
pub(crate) fn empty_object_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some).map_err(serde::de::Error::custom),
    }
}
