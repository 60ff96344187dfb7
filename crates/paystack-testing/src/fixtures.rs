//! Delivery bodies for every catalog kind.
//!
//! Bodies follow what the service sends, including fields the SDK ignores,
//! so that decoding is exercised against realistic input.

use paystack_core::EventKind;
use serde_json::{json, Value};
use uuid::Uuid;

/// Delivery body (`{"event": ..., "data": ...}`) for `kind`.
pub fn event_body(kind: EventKind) -> Value {
    json!({ "event": kind.as_str(), "data": event_data(kind) })
}

/// Delivery body for `kind`, serialized.
pub fn event_bytes(kind: EventKind) -> Vec<u8> {
    event_body(kind).to_string().into_bytes()
}

/// Payload of a valid delivery of `kind`.
pub fn event_data(kind: EventKind) -> Value {
    match kind {
        EventKind::ChargeDisputeCreate => dispute("awaiting-merchant-feedback", None),
        EventKind::ChargeDisputeRemind => dispute("awaiting-merchant-feedback", None),
        EventKind::ChargeDisputeResolve => dispute("resolved", Some("merchant-accepted")),
        EventKind::ChargeSuccess => charge(),
        EventKind::CustomerIdentificationFailed => {
            identification(Some("Account number or BVN is incorrect"))
        },
        EventKind::CustomerIdentificationSuccess => identification(None),
        EventKind::DedicatedAccountAssignFailed => dedicated_account_assignment(false),
        EventKind::DedicatedAccountAssignSuccess => dedicated_account_assignment(true),
        EventKind::InvoiceCreate => invoice(true),
        EventKind::InvoicePaymentFailed => invoice(false),
        EventKind::InvoiceUpdate => invoice(true),
        EventKind::PaymentRequestPending => payment_request(false),
        EventKind::PaymentRequestSuccess => payment_request(true),
        EventKind::RefundFailed => refund("failed"),
        EventKind::RefundPending => refund("pending"),
        EventKind::RefundProcessed => refund("processed"),
        EventKind::RefundProcessing => refund("processing"),
        EventKind::SubscriptionCreate => subscription("active"),
        EventKind::SubscriptionDisable => subscription("complete"),
        EventKind::SubscriptionExpiringCards => expiring_cards(),
        EventKind::SubscriptionNotRenew => subscription("non-renewing"),
        EventKind::TransferFailed => transfer("failed"),
        EventKind::TransferReversed => transfer("reversed"),
        EventKind::TransferSuccess => transfer("success"),
    }
}

/// Payload fields of `kind` that may be absent or `null`.
///
/// For `subscription.expiring_cards` the names apply to each card in the
/// payload array.
pub fn optional_fields(kind: EventKind) -> &'static [&'static str] {
    match kind {
        EventKind::ChargeDisputeCreate
        | EventKind::ChargeDisputeRemind
        | EventKind::ChargeDisputeResolve => &[
            "refund_amount",
            "resolution",
            "transaction_reference",
            "category",
            "bin",
            "last4",
            "dueAt",
            "resolvedAt",
            "evidence",
            "attachments",
            "note",
            "history",
            "messages",
            "created_at",
            "updated_at",
        ],
        EventKind::ChargeSuccess => &[
            "message",
            "paid_at",
            "created_at",
            "ip_address",
            "metadata",
            "log",
            "fees",
            "fees_split",
            "plan",
            "subaccount",
            "split",
            "order_id",
            "requested_amount",
            "pos_transaction_data",
            "source",
        ],
        EventKind::CustomerIdentificationFailed | EventKind::CustomerIdentificationSuccess => {
            &["reason"]
        },
        EventKind::DedicatedAccountAssignFailed | EventKind::DedicatedAccountAssignSuccess => {
            &["dedicated_account", "identification"]
        },
        EventKind::InvoiceCreate | EventKind::InvoicePaymentFailed | EventKind::InvoiceUpdate => {
            &["paid_at", "description", "transaction", "created_at"]
        },
        EventKind::PaymentRequestPending | EventKind::PaymentRequestSuccess => &[
            "due_date",
            "invoice_number",
            "description",
            "pdf_url",
            "line_items",
            "tax",
            "paid_at",
            "metadata",
            "notifications",
            "offline_reference",
            "created_at",
        ],
        EventKind::RefundFailed
        | EventKind::RefundPending
        | EventKind::RefundProcessed
        | EventKind::RefundProcessing => &["refund_reference", "processor", "integration"],
        EventKind::SubscriptionCreate
        | EventKind::SubscriptionDisable
        | EventKind::SubscriptionNotRenew => {
            &["email_token", "next_payment_date", "open_invoice", "created_at"]
        },
        EventKind::SubscriptionExpiringCards => &["description", "brand"],
        EventKind::TransferFailed | EventKind::TransferReversed | EventKind::TransferSuccess => &[
            "failures",
            "integration",
            "reason",
            "reference",
            "source_details",
            "titan_code",
            "transferred_at",
            "session",
            "created_at",
            "updated_at",
        ],
    }
}

/// Unique transaction reference.
pub fn unique_reference() -> String {
    format!("ref_{}", Uuid::new_v4().simple())
}

/// Customer object.
pub fn customer() -> Value {
    json!({
        "id": 84312,
        "first_name": "Bojack",
        "last_name": "Horseman",
        "email": "customer@email.com",
        "customer_code": "CUS_hdhye17yj8qd2tx",
        "phone": null,
        "metadata": null,
        "risk_action": "default",
        "international_format_phone": null
    })
}

/// Reusable card authorization.
pub fn authorization() -> Value {
    json!({
        "authorization_code": "AUTH_8dfhjjdt",
        "bin": "539999",
        "last4": "8877",
        "exp_month": "08",
        "exp_year": "2020",
        "channel": "card",
        "card_type": "mastercard DEBIT",
        "bank": "Guaranty Trust Bank",
        "country_code": "NG",
        "brand": "mastercard",
        "reusable": true,
        "signature": "SIG_uSYN4fv1adlAuoij8QXh",
        "account_name": "BoJack Horseman"
    })
}

/// Subscription plan.
pub fn plan() -> Value {
    json!({
        "id": 22637,
        "name": "Premium Service (Monthly)",
        "plan_code": "PLN_pfmwz75o021slex",
        "description": null,
        "amount": 50000,
        "interval": "monthly",
        "send_invoices": true,
        "send_sms": true,
        "currency": "NGN"
    })
}

fn charge() -> Value {
    json!({
        "id": 302961,
        "domain": "live",
        "status": "success",
        "reference": "qTPrJoy9Bx",
        "amount": 40333,
        "message": null,
        "gateway_response": "Approved by Financial Institution",
        "paid_at": "2016-09-30T21:10:19.000Z",
        "created_at": "2016-09-30T21:09:56.000Z",
        "channel": "card",
        "currency": "NGN",
        "ip_address": "41.242.49.37",
        "metadata": 0,
        "log": {
            "time_spent": 16,
            "attempts": 1,
            "authentication": "pin",
            "errors": 0,
            "success": false,
            "mobile": false,
            "input": [],
            "channel": null,
            "history": [
                {
                    "type": "input",
                    "message": "Filled these fields: card number, card expiry, card cvv",
                    "time": 15
                },
                { "type": "success", "message": "Successfully paid", "time": 16 }
            ]
        },
        "fees": null,
        "customer": customer(),
        "authorization": authorization(),
        "plan": {},
        "subaccount": {},
        "split": {},
        "order_id": null,
        "paidAt": "2016-09-30T21:10:19.000Z",
        "requested_amount": 40333,
        "pos_transaction_data": null,
        "source": {
            "type": "api",
            "source": "merchant_api",
            "entry_point": "transaction_initialize",
            "identifier": null
        }
    })
}

fn dispute(status: &str, resolution: Option<&str>) -> Value {
    json!({
        "id": 358950,
        "refund_amount": 5800,
        "currency": "NGN",
        "status": status,
        "resolution": resolution,
        "domain": "live",
        "transaction": {
            "id": 896467688,
            "domain": "live",
            "status": "success",
            "reference": "v3y9uxyphu",
            "amount": 5800,
            "message": null,
            "gateway_response": "Approved",
            "paid_at": "2020-11-24T13:45:57.000Z",
            "created_at": "2020-11-24T13:45:57.000Z",
            "channel": "card",
            "currency": "NGN",
            "metadata": "",
            "customer": customer(),
            "authorization": authorization(),
            "plan": {}
        },
        "transaction_reference": null,
        "category": "chargeback",
        "customer": customer(),
        "bin": "123412",
        "last4": "1234",
        "dueAt": "2020-11-25T18:00:00.000Z",
        "resolvedAt": null,
        "evidence": null,
        "attachments": null,
        "note": null,
        "history": [
            {
                "status": "pending",
                "by": "demo@test.com",
                "createdAt": "2020-11-24T13:46:16.000Z"
            }
        ],
        "messages": [
            {
                "sender": "demo@test.com",
                "body": "Customer did not recognize the charge",
                "createdAt": "2020-11-24T13:46:16.000Z"
            }
        ],
        "created_at": "2020-11-24T13:46:16.000Z",
        "updated_at": "2020-11-24T18:00:02.000Z"
    })
}

fn identification(reason: Option<&str>) -> Value {
    let mut data = json!({
        "customer_id": "82796315",
        "customer_code": "CUS_XXXXXXXXXXXXXXX",
        "email": "email@email.com",
        "identification": {
            "country": "NG",
            "type": "bank_account",
            "bvn": "123*****456",
            "account_number": "012****345",
            "bank_code": "999991"
        }
    });
    if let Some(reason) = reason {
        data["reason"] = json!(reason);
    }
    data
}

fn dedicated_account_assignment(assigned: bool) -> Value {
    let account = assigned.then(|| {
        json!({
            "bank": { "name": "Wema Bank", "id": 20, "slug": "wema-bank" },
            "account_name": "KaroKart Rhoda Church",
            "account_number": "9930000737",
            "assigned": true,
            "currency": "NGN",
            "metadata": null,
            "active": true,
            "id": 253,
            "created_at": "2022-06-21T17:12:40.000Z",
            "updated_at": "2022-08-12T14:02:51.000Z",
            "assignment": {
                "assignee_id": 100084,
                "assignee_type": "Customer",
                "account_type": "PAY-WITH-TRANSFER-RECURRING",
                "integration": 100043
            }
        })
    });

    json!({
        "customer": customer(),
        "dedicated_account": account,
        "identification": { "status": if assigned { "success" } else { "failed" } }
    })
}

fn invoice(paid: bool) -> Value {
    json!({
        "domain": "test",
        "invoice_code": "INV_thy2vkmirn2urwv",
        "amount": 50000,
        "period_start": "2018-12-20T15:00:00.000Z",
        "period_end": "2018-12-20T15:59:59.000Z",
        "status": if paid { "success" } else { "failed" },
        "paid": paid,
        "paid_at": if paid { json!("2018-12-20T15:00:00.000Z") } else { Value::Null },
        "description": null,
        "authorization": authorization(),
        "subscription": {
            "status": "active",
            "subscription_code": "SUB_f7ct8g01mtcjf4u",
            "email_token": "kjd9t2hu6lrq5j5",
            "amount": 50000,
            "cron_expression": "0 0 20 * *",
            "next_payment_date": "2019-01-20T00:00:00.000Z",
            "open_invoice": null
        },
        "customer": customer(),
        "transaction": {
            "reference": "9cfbae6e-bbf3-5b41-8aef-d72c1a17650g",
            "status": "success",
            "amount": 50000,
            "currency": "NGN"
        },
        "created_at": "2018-12-20T15:00:02.000Z"
    })
}

fn payment_request(paid: bool) -> Value {
    json!({
        "id": 1089700,
        "domain": "test",
        "amount": 10000,
        "currency": "NGN",
        "due_date": null,
        "has_invoice": false,
        "invoice_number": null,
        "description": "test payment request",
        "pdf_url": null,
        "line_items": [],
        "tax": [],
        "request_code": "PRQ_y0paeo93jh99mho",
        "status": if paid { "paid" } else { "pending" },
        "paid": paid,
        "paid_at": if paid { json!("2020-07-08T12:33:19.000Z") } else { Value::Null },
        "metadata": null,
        "notifications": [
            { "sent_at": "2020-07-08T12:32:20.421Z", "channel": "email" }
        ],
        "offline_reference": "3365451089700",
        "customer": 7454223,
        "created_at": "2020-07-08T12:32:19.000Z"
    })
}

fn refund(status: &str) -> Value {
    json!({
        "status": status,
        "transaction_reference": "1641152357",
        "refund_reference": if status == "processed" { json!("TJ9876543210") } else { Value::Null },
        "amount": 10000,
        "currency": "NGN",
        "processor": "mpgs_zen",
        "customer": {
            "first_name": "Damilola",
            "last_name": "Odujoko",
            "email": "damilola@email.com"
        },
        "integration": 412829,
        "domain": "live"
    })
}

fn subscription(status: &str) -> Value {
    let renewing = status == "active";
    json!({
        "domain": "test",
        "status": status,
        "subscription_code": "SUB_vsyqdmlzble3uii",
        "email_token": "d7gofp6yppn3qz7",
        "amount": 50000,
        "cron_expression": "0 0 28 * *",
        "next_payment_date": if renewing { json!("2016-05-19T07:00:00.000Z") } else { Value::Null },
        "open_invoice": null,
        "createdAt": "2016-03-20T00:23:24.000Z",
        "created_at": "2016-03-20T00:23:24.000Z",
        "plan": plan(),
        "authorization": authorization(),
        "customer": customer()
    })
}

fn expiring_cards() -> Value {
    json!([
        {
            "expiry_date": "12/2021",
            "description": "visa ending with 4081",
            "brand": "visa",
            "subscription": {
                "id": 4192,
                "subscription_code": "SUB_vsyqdmlzble3uii",
                "amount": 50000,
                "next_payment_date": "2021-12-01T00:00:01.000Z",
                "plan": {
                    "interval": "monthly",
                    "id": 22637,
                    "name": "Premium Service (Monthly)",
                    "plan_code": "PLN_pfmwz75o021slex"
                }
            },
            "customer": {
                "id": 56794,
                "first_name": "Jane",
                "last_name": "Doe",
                "email": "jane@doe.com",
                "customer_code": "CUS_xnxdt6s1zg1f4nx"
            }
        }
    ])
}

fn transfer(status: &str) -> Value {
    json!({
        "amount": 30000,
        "currency": "NGN",
        "domain": "test",
        "failures": null,
        "id": 37272792,
        "integration": {
            "id": 463433,
            "is_live": true,
            "business_name": "Boom Boom Industries NG"
        },
        "reason": "Have fun...",
        "reference": "1jhbs3ozmen0k7y5efmw",
        "source": "balance",
        "source_details": null,
        "status": status,
        "titan_code": null,
        "transfer_code": "TRF_wpl1dem4967avzm",
        "transferred_at": null,
        "recipient": {
            "active": true,
            "currency": "NGN",
            "description": "",
            "domain": "test",
            "email": null,
            "id": 8690817,
            "integration": 463433,
            "metadata": null,
            "name": "Jack Sparrow",
            "recipient_code": "RCP_a8wkxiychzdzfgs",
            "type": "nuban",
            "is_deleted": false,
            "details": {
                "account_number": "0000000000",
                "account_name": null,
                "bank_code": "011",
                "bank_name": "First Bank of Nigeria"
            },
            "created_at": "2020-09-03T12:11:25.000Z",
            "updated_at": "2020-09-03T12:11:25.000Z"
        },
        "session": { "provider": null, "id": null },
        "created_at": "2020-10-26T12:28:57.000Z",
        "updated_at": "2020-10-26T12:28:57.000Z"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_body_names_its_kind() {
        for kind in EventKind::ALL {
            assert_eq!(event_body(*kind)["event"], kind.as_str());
        }
    }

    #[test]
    fn references_are_unique() {
        assert_ne!(unique_reference(), unique_reference());
    }
}
