//! Domain models shared by webhook payloads and API responses.
//!
//! Amounts are integer minor units (kobo, pesewas, cents). Optional and
//! nullable fields are `Option` so that both an absent key and an explicit
//! `null` are accepted. Unknown fields are ignored so that additions on the
//! service side do not break decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads an explicit `null` as the type's default.
///
/// Pair with `#[serde(default)]` so an absent key decodes the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Customer attached to a transaction, subscription or dedicated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Numeric customer id.
    pub id: u64,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Customer code (`CUS_...`).
    pub customer_code: String,
    /// Phone number as entered.
    pub phone: Option<String>,
    /// Free-form metadata.
    pub metadata: Option<Value>,
    /// Risk action applied to the customer (`default`, `allow`, `deny`).
    pub risk_action: Option<String>,
    /// Phone number in E.164 format.
    pub international_format_phone: Option<String>,
}

impl Customer {
    /// Returns "first last" when either part is present.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }
}

/// Reusable payment authorization (card, bank account or mobile money).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
    /// Code used to charge this authorization again (`AUTH_...`).
    pub authorization_code: String,
    /// Card BIN.
    pub bin: Option<String>,
    /// Last four digits.
    pub last4: Option<String>,
    /// Expiry month, two digits.
    pub exp_month: Option<String>,
    /// Expiry year, four digits.
    pub exp_year: Option<String>,
    /// Payment channel (`card`, `bank`, `ussd`...).
    pub channel: Option<String>,
    /// Card type, e.g. `visa DEBIT`.
    pub card_type: Option<String>,
    /// Issuing bank name.
    pub bank: Option<String>,
    /// ISO country code of the issuer.
    pub country_code: Option<String>,
    /// Card brand.
    pub brand: Option<String>,
    /// Whether the authorization can be charged again.
    pub reusable: Option<bool>,
    /// Card signature, stable across authorizations of the same card.
    pub signature: Option<String>,
    /// Account holder name when known.
    pub account_name: Option<String>,
}

/// Subscription plan.
///
/// Every field is optional: `charge.success` sends an empty object for
/// transactions that are not tied to a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Numeric plan id.
    pub id: Option<u64>,
    /// Display name.
    pub name: Option<String>,
    /// Plan code (`PLN_...`).
    pub plan_code: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Amount charged per interval.
    pub amount: Option<i64>,
    /// Billing interval (`daily`, `weekly`, `monthly`, `annually`...).
    pub interval: Option<String>,
    /// Whether invoices are emailed.
    pub send_invoices: Option<bool>,
    /// Whether SMS notifications are sent.
    pub send_sms: Option<bool>,
    /// ISO currency code.
    pub currency: Option<String>,
}

impl Plan {
    /// Whether the service sent an empty plan object.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Bank that hosts a dedicated virtual account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    /// Bank name.
    pub name: String,
    /// Numeric bank id.
    pub id: u64,
    /// Provider slug, e.g. `wema-bank`.
    pub slug: String,
}

/// Destination details of a transfer recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientDetails {
    /// Authorization code for card recipients.
    pub authorization_code: Option<String>,
    /// Account number.
    pub account_number: Option<String>,
    /// Resolved account name.
    pub account_name: Option<String>,
    /// Bank code.
    pub bank_code: Option<String>,
    /// Bank name.
    pub bank_name: Option<String>,
}

/// Dedicated virtual account assigned to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedicatedAccount {
    /// Numeric account id.
    pub id: u64,
    /// Name on the account.
    pub account_name: String,
    /// Account number customers transfer into.
    pub account_number: String,
    /// Whether the account is currently assigned.
    pub assigned: bool,
    /// ISO currency code.
    pub currency: String,
    /// Whether the account is active.
    pub active: bool,
    /// Hosting bank.
    pub bank: Bank,
    /// Owning customer, present on API responses.
    pub customer: Option<Customer>,
    /// Assignment details (integration, assignee, timestamps).
    pub assignment: Option<Value>,
    /// Free-form metadata.
    pub metadata: Option<Value>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn customer_tolerates_nulls_and_extra_fields() {
        let customer: Customer = serde_json::from_value(json!({
            "id": 84312,
            "first_name": null,
            "email": "bojack@horsinaround.com",
            "customer_code": "CUS_hdhye17yj8qd2tx",
            "phone": null,
            "metadata": null,
            "risk_action": "default",
            "some_new_field": {"nested": true}
        }))
        .unwrap();

        assert_eq!(customer.id, 84312);
        assert!(customer.first_name.is_none());
        assert!(customer.last_name.is_none());
        assert_eq!(customer.full_name(), None);
    }

    #[test]
    fn customer_requires_email() {
        let result: Result<Customer, _> = serde_json::from_value(json!({
            "id": 1,
            "customer_code": "CUS_x"
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("email"), "unexpected error: {err}");
    }

    #[test]
    fn empty_plan_object_decodes() {
        let plan: Plan = serde_json::from_value(json!({})).unwrap();
        assert!(plan.is_empty());
    }

    #[derive(Debug, Deserialize)]
    struct Listing {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<u64>,
    }

    #[test]
    fn null_as_default_accepts_null_and_absent() {
        let null: Listing = serde_json::from_value(json!({"items": null})).unwrap();
        let absent: Listing = serde_json::from_value(json!({})).unwrap();
        let present: Listing = serde_json::from_value(json!({"items": [1, 2]})).unwrap();

        assert!(null.items.is_empty());
        assert!(absent.items.is_empty());
        assert_eq!(present.items, vec![1, 2]);
    }

    #[test]
    fn full_name_joins_parts() {
        let customer = Customer {
            id: 1,
            first_name: Some("Diane".into()),
            last_name: Some("Nguyen".into()),
            email: "diane@example.com".into(),
            customer_code: "CUS_1".into(),
            phone: None,
            metadata: None,
            risk_action: None,
            international_format_phone: None,
        };
        assert_eq!(customer.full_name().as_deref(), Some("Diane Nguyen"));
    }
}
