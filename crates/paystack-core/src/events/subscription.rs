//! `subscription.*` payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Authorization, Customer, Plan};

/// Subscription of a customer to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// `test` or `live`.
    pub domain: String,
    /// `active`, `non-renewing`, `attention`, `completed` or `cancelled`.
    pub status: String,
    /// Subscription code (`SUB_...`).
    pub subscription_code: String,
    /// Token used to manage the subscription by email link.
    pub email_token: Option<String>,
    /// Amount charged per interval.
    pub amount: i64,
    /// Billing schedule.
    pub cron_expression: String,
    /// Next charge date; `null` once the subscription stops renewing.
    pub next_payment_date: Option<DateTime<Utc>>,
    /// Open invoice code, if any.
    pub open_invoice: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Subscribed plan.
    pub plan: Plan,
    /// Authorization charged on renewal.
    pub authorization: Authorization,
    /// Subscribed customer.
    pub customer: Customer,
}

impl Subscription {
    /// Whether the subscription will be charged again.
    pub fn renews(&self) -> bool {
        self.status == "active" && self.next_payment_date.is_some()
    }
}

/// Card about to expire on an active subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringCard {
    /// Expiry as `MM/YYYY`.
    pub expiry_date: String,
    /// Card description, e.g. `visa ending with 4081`.
    pub description: Option<String>,
    /// Card brand.
    pub brand: Option<String>,
    /// Subscription charged to the card.
    pub subscription: ExpiringCardSubscription,
    /// Card owner.
    pub customer: Customer,
}

/// Subscription summary on an expiring card notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringCardSubscription {
    /// Numeric subscription id.
    pub id: u64,
    /// Subscription code (`SUB_...`).
    pub subscription_code: String,
    /// Amount charged per interval.
    pub amount: i64,
    /// Next charge date.
    pub next_payment_date: Option<DateTime<Utc>>,
    /// Subscribed plan.
    pub plan: Plan,
}
