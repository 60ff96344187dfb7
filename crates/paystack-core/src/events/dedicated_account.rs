//! `dedicatedaccount.assign.*` payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Customer, DedicatedAccount};

/// Result of assigning a dedicated virtual account to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedicatedAccountAssignment {
    /// Customer the account was requested for.
    pub customer: Customer,
    /// Assigned account; `null` when assignment failed.
    pub dedicated_account: Option<DedicatedAccount>,
    /// Identification status that gated the assignment.
    pub identification: Option<Value>,
}

impl DedicatedAccountAssignment {
    /// Account number when an account was assigned.
    pub fn account_number(&self) -> Option<&str> {
        self.dedicated_account.as_ref().map(|account| account.account_number.as_str())
    }
}
