//! Webhook event catalog.
//!
//! Every delivery carries an `event` tag and a `data` payload whose shape is
//! fixed by the tag. The catalog below is the single declaration of that
//! pairing; it generates:
//!
//! - [`EventKind`]: the closed set of tags, enumerable through
//!   [`EventKind::ALL`].
//! - [`Event`]: one variant per kind holding the validated payload.
//! - [`kinds`]: a zero-sized marker per kind implementing [`EventKindMarker`],
//!   used to register handlers that receive exactly that kind's payload.
//!
//! ```text
//!   {"event": "charge.success", "data": {...}}
//!              │                        │
//!              ▼                        ▼
//!   EventKind::ChargeSuccess ──▶ Event::ChargeSuccess(Charge)
//! ```
//!
//! Adding a kind means adding one catalog line and, if needed, its payload
//! shape; every exhaustive `match` over `EventKind` or `Event` then fails to
//! compile until the new kind is handled.

use std::{fmt, str::FromStr};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

mod charge;
mod dedicated_account;
mod dispute;
mod identification;
mod invoice;
mod payment_request;
mod refund;
mod subscription;
mod transfer;

pub use charge::{Charge, ChargeSource};
pub use dedicated_account::DedicatedAccountAssignment;
pub use dispute::{Dispute, DisputeHistory, DisputeMessage, DisputeTransaction};
pub use identification::{CustomerIdentification, Identification};
pub use invoice::{Invoice, InvoiceSubscription};
pub use payment_request::PaymentRequest;
pub use refund::{Refund, RefundCustomer};
pub use subscription::{ExpiringCard, ExpiringCardSubscription, Subscription};
pub use transfer::{Transfer, TransferRecipient};

/// Name of the discriminator field in a delivery body.
pub const DISCRIMINATOR_FIELD: &str = "event";

/// Name of the payload field in a delivery body.
pub const PAYLOAD_FIELD: &str = "data";

/// Binds a marker type to one event kind and its payload shape.
///
/// Implemented by every type in [`kinds`]. Handler registration is generic
/// over this trait, so a handler registered for a kind can only ever be
/// called with that kind's payload.
pub trait EventKindMarker: Send + Sync + 'static {
    /// Payload shape delivered for this kind.
    type Data: Serialize + DeserializeOwned + Clone + Send + 'static;

    /// The kind this marker selects.
    const KIND: EventKind;

    /// Takes the payload out of an event of this kind.
    ///
    /// Returns `None` when the event is of another kind.
    fn extract(event: Event) -> Option<Self::Data>;
}

macro_rules! event_catalog {
    ($( $(#[$doc:meta])* $variant:ident => $tag:tt : $data:ty ),+ $(,)?) => {
        /// Closed set of event kinds the service delivers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum EventKind {
            $(
                $(#[$doc])*
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl EventKind {
            /// Every kind in the catalog, in declaration order.
            pub const ALL: &'static [EventKind] = &[$(EventKind::$variant),+];

            /// Wire tag carried in the `event` field.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }

            /// Looks up a kind by its wire tag.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        /// Validated webhook event: a catalog kind paired with its payload.
        ///
        /// Serializes back into the delivery body format
        /// (`{"event": <tag>, "data": <payload>}`).
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "event", content = "data")]
        pub enum Event {
            $(
                #[doc = concat!("`", $tag, "` delivery.")]
                #[serde(rename = $tag)]
                $variant($data),
            )+
        }

        impl Event {
            /// Kind of this event.
            pub const fn kind(&self) -> EventKind {
                match self {
                    $(Self::$variant(_) => EventKind::$variant,)+
                }
            }

            /// Validates `data` against the payload shape of `kind`.
            ///
            /// # Errors
            ///
            /// Returns the decoding error when `data` does not match the
            /// shape. The message names the offending field.
            pub fn from_data(kind: EventKind, data: Value) -> Result<Self, serde_json::Error> {
                match kind {
                    $(EventKind::$variant => serde_json::from_value::<$data>(data).map(Self::$variant),)+
                }
            }
        }

        /// Marker types selecting one event kind each.
        ///
        /// ```
        /// use paystack_core::events::{kinds, EventKind, EventKindMarker};
        ///
        /// assert_eq!(<kinds::ChargeSuccess as EventKindMarker>::KIND, EventKind::ChargeSuccess);
        /// ```
        pub mod kinds {
            use super::*;

            $(
                #[doc = concat!("Selects `", $tag, "` deliveries.")]
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct $variant;

                impl EventKindMarker for $variant {
                    type Data = $data;
                    const KIND: EventKind = EventKind::$variant;

                    fn extract(event: Event) -> Option<Self::Data> {
                        match event {
                            Event::$variant(data) => Some(data),
                            _ => None,
                        }
                    }
                }
            )+
        }
    };
}

event_catalog! {
    /// A customer opened a dispute on a charge.
    ChargeDisputeCreate => "charge.dispute.create": Dispute,
    /// A dispute is awaiting a response from the merchant.
    ChargeDisputeRemind => "charge.dispute.remind": Dispute,
    /// A dispute was resolved.
    ChargeDisputeResolve => "charge.dispute.resolve": Dispute,
    /// A charge completed successfully.
    ChargeSuccess => "charge.success": Charge,
    /// Customer identity validation failed.
    CustomerIdentificationFailed => "customeridentification.failed": CustomerIdentification,
    /// Customer identity validation succeeded.
    CustomerIdentificationSuccess => "customeridentification.success": CustomerIdentification,
    /// Dedicated virtual account could not be assigned.
    DedicatedAccountAssignFailed => "dedicatedaccount.assign.failed": DedicatedAccountAssignment,
    /// Dedicated virtual account was assigned.
    DedicatedAccountAssignSuccess => "dedicatedaccount.assign.success": DedicatedAccountAssignment,
    /// An invoice was created for a subscription.
    InvoiceCreate => "invoice.create": Invoice,
    /// Charging a subscription invoice failed.
    InvoicePaymentFailed => "invoice.payment_failed": Invoice,
    /// An invoice was updated, usually after a charge attempt.
    InvoiceUpdate => "invoice.update": Invoice,
    /// A payment request was sent and awaits payment.
    PaymentRequestPending => "paymentrequest.pending": PaymentRequest,
    /// A payment request was paid.
    PaymentRequestSuccess => "paymentrequest.success": PaymentRequest,
    /// A refund could not be processed.
    RefundFailed => "refund.failed": Refund,
    /// A refund was initiated.
    RefundPending => "refund.pending": Refund,
    /// A refund completed.
    RefundProcessed => "refund.processed": Refund,
    /// A refund was submitted to the processor.
    RefundProcessing => "refund.processing": Refund,
    /// A subscription was created.
    SubscriptionCreate => "subscription.create": Subscription,
    /// A subscription was disabled.
    SubscriptionDisable => "subscription.disable": Subscription,
    /// Cards attached to subscriptions expire this month.
    SubscriptionExpiringCards => "subscription.expiring_cards": Vec<ExpiringCard>,
    /// A subscription will not renew on its next payment date.
    SubscriptionNotRenew => "subscription.not_renew": Subscription,
    /// A transfer failed.
    TransferFailed => "transfer.failed": Transfer,
    /// A transfer was reversed.
    TransferReversed => "transfer.reversed": Transfer,
    /// A transfer completed.
    TransferSuccess => "transfer.success": Transfer,
}

impl Event {
    /// Serializes the event into a delivery body.
    ///
    /// # Errors
    ///
    /// Returns an error if a payload value cannot be represented as JSON.
    pub fn to_body(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Serializes only the payload.
    ///
    /// # Errors
    ///
    /// Returns an error if a payload value cannot be represented as JSON.
    pub fn data_value(&self) -> Result<Value, serde_json::Error> {
        let mut body = serde_json::to_value(self)?;
        Ok(body.get_mut(PAYLOAD_FIELD).map(Value::take).unwrap_or(Value::Null))
    }
}

impl EventKind {
    /// Resource family of the kind: the tag segment before the first dot.
    pub fn family(self) -> &'static str {
        let tag = self.as_str();
        tag.split_once('.').map_or(tag, |(family, _)| family)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| CoreError::UnknownEventKind { tag: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_twenty_four_kinds() {
        assert_eq!(EventKind::ALL.len(), 24);
    }

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<_> = EventKind::ALL.iter().map(|kind| kind.as_str()).collect();
        assert_eq!(tags.len(), EventKind::ALL.len());
    }

    #[test]
    fn tag_lookup_round_trips() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_tag(kind.as_str()), Some(*kind));
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(EventKind::from_tag("some.unknown.kind"), None);
        assert_eq!(EventKind::from_tag("CHARGE.SUCCESS"), None);

        let err = "charge.pending".parse::<EventKind>().unwrap_err();
        assert_eq!(err, CoreError::UnknownEventKind { tag: "charge.pending".into() });
    }

    #[test]
    fn kind_serializes_as_wire_tag() {
        let json = serde_json::to_string(&EventKind::TransferReversed).unwrap();
        assert_eq!(json, "\"transfer.reversed\"");
    }

    #[test]
    fn family_is_prefix() {
        assert_eq!(EventKind::ChargeDisputeCreate.family(), "charge");
        assert_eq!(EventKind::DedicatedAccountAssignSuccess.family(), "dedicatedaccount");
        assert_eq!(EventKind::SubscriptionExpiringCards.family(), "subscription");
    }

    #[test]
    fn marker_extracts_only_its_kind() {
        let event = Event::SubscriptionExpiringCards(Vec::new());

        assert_eq!(
            <kinds::SubscriptionExpiringCards as EventKindMarker>::extract(event.clone()),
            Some(Vec::new())
        );
        assert!(<kinds::ChargeSuccess as EventKindMarker>::extract(event).is_none());
    }

    #[test]
    fn from_data_reports_missing_field() {
        let err = Event::from_data(EventKind::TransferSuccess, serde_json::json!({}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing field"), "unexpected error: {err}");
    }

    #[test]
    fn from_data_rejects_null_payload() {
        assert!(Event::from_data(EventKind::ChargeSuccess, Value::Null).is_err());
    }
}
