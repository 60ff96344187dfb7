//! Resource modules against a mocked API.

#![allow(clippy::unwrap_used)]

use paystack_client::{
    resources::{
        dedicated_accounts::CreateDedicatedAccount,
        recipients::{CreateRecipient, UpdateRecipient},
        splits::{BearerType, CreateSplit, SplitType, SubaccountShare},
        transactions::{ChargeAuthorization, InitializeTransaction, ListTransactions},
        transfers::{FinalizeTransfer, InitiateTransfer},
        verification::ListBanks,
    },
    ApiError, ClientConfig, ErrorCategory, ListParams, Paystack,
};
use paystack_testing::{fixtures, test_secret, ApiMock, MockEndpoint, TEST_SECRET_KEY};
use serde_json::{json, Value};

fn paystack(mock: &ApiMock) -> Paystack {
    let config = ClientConfig { base_url: mock.uri(), ..ClientConfig::default() };
    Paystack::with_config(test_secret(), config).unwrap()
}

fn transaction(reference: &str, status: &str) -> Value {
    json!({
        "id": 4099260516_u64,
        "domain": "test",
        "status": status,
        "reference": reference,
        "amount": 40333,
        "message": null,
        "gateway_response": "Successful",
        "paid_at": "2024-08-22T09:15:02.000Z",
        "created_at": "2024-08-22T09:14:24.000Z",
        "channel": "card",
        "currency": "NGN",
        "ip_address": "197.210.54.33",
        "metadata": "",
        "fees": 10283,
        "customer": fixtures::customer(),
        "authorization": fixtures::authorization(),
        "plan": null,
        "requested_amount": 40333
    })
}

fn recipient() -> Value {
    json!({
        "active": true,
        "createdAt": "2020-05-13T13:59:07.741Z",
        "currency": "NGN",
        "domain": "test",
        "id": 6788170,
        "integration": 463433,
        "name": "Tolu Robert",
        "recipient_code": "RCP_t0ya41mp35flk40",
        "type": "nuban",
        "updatedAt": "2020-05-13T13:59:07.741Z",
        "is_deleted": false,
        "details": {
            "authorization_code": null,
            "account_number": "01000000010",
            "account_name": null,
            "bank_code": "058",
            "bank_name": "Guaranty Trust Bank"
        }
    })
}

fn dedicated_account() -> Value {
    json!({
        "bank": { "name": "Wema Bank", "id": 20, "slug": "wema-bank" },
        "account_name": "KAROKART / RHODA CHURCH",
        "account_number": "9930000737",
        "assigned": true,
        "currency": "NGN",
        "metadata": null,
        "active": true,
        "id": 253,
        "created_at": "2019-12-12T12:39:04.000Z",
        "updated_at": "2020-01-06T15:51:24.000Z",
        "assignment": {
            "integration": 100043,
            "assignee_id": 7454289,
            "assignee_type": "Customer",
            "expired": false,
            "account_type": "PAY-WITH-TRANSFER-RECURRING"
        },
        "customer": fixtures::customer()
    })
}

#[tokio::test]
async fn initialize_returns_checkout_session() {
    let mock = ApiMock::start().await;
    mock.mock(
        MockEndpoint::ok(
            "POST",
            "/transaction/initialize",
            json!({
                "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
                "access_code": "0peioxfhpn",
                "reference": "7PVGX8MEk85tgeEpVDtD"
            }),
        )
        .with_bearer(TEST_SECRET_KEY)
        .with_json_body(json!({ "email": "customer@email.com", "amount": 20000 }))
        .expect_calls(1),
    )
    .await;

    let params = InitializeTransaction {
        email: "customer@email.com".into(),
        amount: 20000,
        ..InitializeTransaction::default()
    };
    let session = paystack(&mock).transactions().initialize(&params).await.unwrap().into_data();

    assert_eq!(session.access_code, "0peioxfhpn");
    assert_eq!(session.reference, "7PVGX8MEk85tgeEpVDtD");
}

#[tokio::test]
async fn verify_decodes_transaction() {
    let mock = ApiMock::start().await;
    let reference = fixtures::unique_reference();
    mock.mock(MockEndpoint::ok(
        "GET",
        format!("/transaction/verify/{reference}"),
        transaction(&reference, "success"),
    ))
    .await;

    let response = paystack(&mock).transactions().verify(&reference).await.unwrap();

    assert_eq!(response.message, "Request successful");
    let transaction = response.data;
    assert!(transaction.is_successful());
    assert_eq!(transaction.reference, reference);
    assert_eq!(transaction.authorization.unwrap().authorization_code, "AUTH_8dfhjjdt");
}

#[tokio::test]
async fn unknown_reference_is_api_error() {
    let mock = ApiMock::start().await;
    mock.mock(MockEndpoint::error(
        "GET",
        "/transaction/verify/missing",
        400,
        "Transaction reference not found",
    ))
    .await;

    let err = paystack(&mock).transactions().verify("missing").await.unwrap_err();

    assert_eq!(err, ApiError::api(400, "Transaction reference not found"));
    assert_eq!(ErrorCategory::from(&err), ErrorCategory::Client);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn list_sends_filters_and_reads_meta() {
    let mock = ApiMock::start().await;
    mock.mock(
        MockEndpoint::ok_paginated(
            "GET",
            "/transaction",
            json!([transaction("ref_a", "success"), transaction("ref_b", "failed")]),
            2,
        )
        .with_query("perPage", "2")
        .with_query("status", "success"),
    )
    .await;

    let params = ListTransactions {
        per_page: Some(2),
        status: Some("success".into()),
        ..ListTransactions::default()
    };
    let response = paystack(&mock).transactions().list(&params).await.unwrap();

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.meta.unwrap().total, Some(2));
}

#[tokio::test]
async fn charge_authorization_and_totals() {
    let mock = ApiMock::start().await;
    mock.mock(
        MockEndpoint::ok(
            "POST",
            "/transaction/charge_authorization",
            transaction("ref_recurring", "success"),
        )
        .with_json_body(json!({ "authorization_code": "AUTH_8dfhjjdt" })),
    )
    .await;
    mock.mock(MockEndpoint::ok(
        "GET",
        "/transaction/totals",
        json!({
            "total_transactions": 42670,
            "unique_customers": 8983,
            "total_volume": 6617829946_i64,
            "total_volume_by_currency": [{ "currency": "NGN", "amount": 6617829946_i64 }],
            "pending_transfers": 6617829946_i64,
            "pending_transfers_by_currency": [{ "currency": "NGN", "amount": 6617829946_i64 }]
        }),
    ))
    .await;

    let paystack = paystack(&mock);
    let params = ChargeAuthorization {
        email: "customer@email.com".into(),
        amount: 40333,
        authorization_code: "AUTH_8dfhjjdt".into(),
        ..ChargeAuthorization::default()
    };
    let charged = paystack.transactions().charge_authorization(&params).await.unwrap();
    assert_eq!(charged.data.reference, "ref_recurring");

    let totals = paystack.transactions().totals(&ListParams::default()).await.unwrap().data;
    assert_eq!(totals.total_transactions, 42670);
    assert_eq!(totals.total_volume_by_currency[0].currency, "NGN");
}

#[tokio::test]
async fn transfer_requiring_otp_is_finalized() {
    let mock = ApiMock::start().await;
    let pending = json!({
        "integration": 100073,
        "domain": "test",
        "amount": 3794800,
        "currency": "NGN",
        "source": "balance",
        "reason": "Calm down",
        "recipient": 28,
        "status": "otp",
        "transfer_code": "TRF_1ptvuv321ahaa7q",
        "id": 14,
        "createdAt": "2017-02-03T17:21:54.508Z",
        "updatedAt": "2017-02-03T17:21:54.508Z"
    });
    let mut finalized = pending.clone();
    finalized["status"] = json!("success");

    mock.mock(MockEndpoint::ok("POST", "/transfer", pending)).await;
    mock.mock(
        MockEndpoint::ok("POST", "/transfer/finalize_transfer", finalized)
            .with_json_body(json!({ "transfer_code": "TRF_1ptvuv321ahaa7q", "otp": "928783" })),
    )
    .await;

    let paystack = paystack(&mock);
    let initiated = paystack
        .transfers()
        .initiate(&InitiateTransfer::from_balance(3794800, "RCP_gx2wn530m0i3w3m"))
        .await
        .unwrap()
        .into_data();
    assert!(initiated.requires_otp());

    let params = FinalizeTransfer {
        transfer_code: initiated.transfer_code,
        otp: "928783".into(),
    };
    let finalized = paystack.transfers().finalize(&params).await.unwrap().into_data();
    assert_eq!(finalized.status, "success");
}

#[tokio::test]
async fn recipient_lifecycle() {
    let mock = ApiMock::start().await;
    mock.mock(MockEndpoint::ok("POST", "/transferrecipient", recipient())).await;
    mock.mock(MockEndpoint::ok("GET", "/transferrecipient/RCP_t0ya41mp35flk40", recipient())).await;
    mock.mock(
        MockEndpoint::raw(
            "PUT",
            "/transferrecipient/RCP_t0ya41mp35flk40",
            200,
            json!({ "status": true, "message": "Recipient updated" }),
        )
        .with_json_body(json!({ "name": "Rick Sanchez" })),
    )
    .await;
    mock.mock(MockEndpoint::raw(
        "DELETE",
        "/transferrecipient/RCP_t0ya41mp35flk40",
        200,
        json!({ "status": true, "message": "Transfer recipient set as inactive" }),
    ))
    .await;

    let paystack = paystack(&mock);
    let recipients = paystack.recipients();

    let created = recipients
        .create(&CreateRecipient::nuban("Tolu Robert", "01000000010", "058"))
        .await
        .unwrap()
        .into_data();
    assert_eq!(created.recipient_type, "nuban");
    assert_eq!(created.details.bank_code.as_deref(), Some("058"));

    let fetched = recipients.fetch(&created.recipient_code).await.unwrap().into_data();
    assert_eq!(fetched, created);

    let update = UpdateRecipient { name: "Rick Sanchez".into(), email: None };
    let updated = recipients.update(&created.recipient_code, &update).await.unwrap();
    assert_eq!(updated.message, "Recipient updated");
    assert!(updated.data.is_null());

    let deleted = recipients.delete(&created.recipient_code).await.unwrap();
    assert_eq!(deleted.message, "Transfer recipient set as inactive");
}

#[tokio::test]
async fn split_subaccounts_are_managed() {
    let mock = ApiMock::start().await;
    let split = json!({
        "id": 142,
        "name": "Halfsies",
        "type": "percentage",
        "currency": "NGN",
        "integration": 428626,
        "domain": "test",
        "split_code": "SPL_e7jnRLtzla",
        "active": true,
        "bearer_type": "subaccount",
        "bearer_subaccount": 40809,
        "createdAt": "2020-06-30T11:42:29.954Z",
        "updatedAt": "2020-06-30T11:42:29.954Z",
        "subaccounts": [
            { "subaccount": { "subaccount_code": "ACCT_z3x6z3nbo14xsil" }, "share": 20 }
        ],
        "total_subaccounts": 1
    });

    mock.mock(
        MockEndpoint::ok("POST", "/split", split.clone())
            .with_json_body(json!({ "type": "percentage", "bearer_type": "subaccount" })),
    )
    .await;
    mock.mock(
        MockEndpoint::ok("POST", "/split/142/subaccount/add", split)
            .with_json_body(json!({ "subaccount": "ACCT_eg4sob4590pq9vb", "share": 30 })),
    )
    .await;
    mock.mock(
        MockEndpoint::raw(
            "POST",
            "/split/142/subaccount/remove",
            200,
            json!({ "status": true, "message": "Subaccount removed" }),
        )
        .with_json_body(json!({ "subaccount": "ACCT_eg4sob4590pq9vb" })),
    )
    .await;

    let paystack = paystack(&mock);
    let params = CreateSplit {
        name: "Halfsies".into(),
        split_type: SplitType::Percentage,
        currency: "NGN".into(),
        subaccounts: vec![SubaccountShare { subaccount: "ACCT_z3x6z3nbo14xsil".into(), share: 20 }],
        bearer_type: Some(BearerType::Subaccount),
        bearer_subaccount: Some("ACCT_z3x6z3nbo14xsil".into()),
    };
    let created = paystack.splits().create(&params).await.unwrap().into_data();
    assert_eq!(created.split_code, "SPL_e7jnRLtzla");

    let share = SubaccountShare { subaccount: "ACCT_eg4sob4590pq9vb".into(), share: 30 };
    paystack.splits().add_subaccount(created.id, &share).await.unwrap();

    let removed =
        paystack.splits().remove_subaccount(created.id, "ACCT_eg4sob4590pq9vb").await.unwrap();
    assert_eq!(removed.message, "Subaccount removed");
}

#[tokio::test]
async fn dedicated_account_is_created_and_deactivated() {
    let mock = ApiMock::start().await;
    mock.mock(
        MockEndpoint::ok("POST", "/dedicated_account", dedicated_account()).with_json_body(
            json!({ "customer": "CUS_hdhye17yj8qd2tx", "preferred_bank": "wema-bank" }),
        ),
    )
    .await;
    let mut inactive = dedicated_account();
    inactive["active"] = json!(false);
    mock.mock(MockEndpoint::ok("DELETE", "/dedicated_account/253", inactive)).await;
    mock.mock(MockEndpoint::ok(
        "GET",
        "/dedicated_account/available_providers",
        json!([
            { "provider_slug": "access-bank", "bank_id": 1, "bank_name": "Access Bank", "id": 6 },
            { "provider_slug": "wema-bank", "bank_id": 20, "bank_name": "Wema Bank", "id": 5 }
        ]),
    ))
    .await;

    let paystack = paystack(&mock);
    let accounts = paystack.dedicated_accounts();

    let providers = accounts.available_providers().await.unwrap().into_data();
    assert_eq!(providers.len(), 2);

    let params = CreateDedicatedAccount {
        customer: "CUS_hdhye17yj8qd2tx".into(),
        preferred_bank: Some(providers[1].provider_slug.clone()),
        ..CreateDedicatedAccount::default()
    };
    let account = accounts.create(&params).await.unwrap().into_data();
    assert_eq!(account.bank.slug, "wema-bank");
    assert!(account.active);

    let deactivated = accounts.deactivate(account.id).await.unwrap().into_data();
    assert!(!deactivated.active);
}

#[tokio::test]
async fn verification_endpoints() {
    let mock = ApiMock::start().await;
    mock.mock(
        MockEndpoint::ok(
            "GET",
            "/bank/resolve",
            json!({
                "account_number": "0001234567",
                "account_name": "Doe Jane Loren",
                "bank_id": 9
            }),
        )
        .with_query("account_number", "0001234567")
        .with_query("bank_code", "058"),
    )
    .await;
    mock.mock(MockEndpoint::ok(
        "GET",
        "/decision/bin/539983",
        json!({
            "bin": "539983",
            "brand": "Mastercard",
            "sub_brand": "",
            "country_code": "NG",
            "country_name": "Nigeria",
            "card_type": "DEBIT",
            "bank": "Guaranty Trust Bank",
            "linked_bank_id": 9
        }),
    ))
    .await;
    mock.mock(
        MockEndpoint::ok(
            "GET",
            "/bank",
            json!([{
                "name": "Abbey Mortgage Bank",
                "slug": "abbey-mortgage-bank",
                "code": "801",
                "longcode": "",
                "gateway": null,
                "pay_with_bank": false,
                "active": true,
                "is_deleted": false,
                "country": "Nigeria",
                "currency": "NGN",
                "type": "nuban",
                "id": 174
            }]),
        )
        .with_query("country", "nigeria"),
    )
    .await;

    let paystack = paystack(&mock);
    let verification = paystack.verification();

    let account = verification.resolve_account("0001234567", "058").await.unwrap().into_data();
    assert_eq!(account.account_name, "Doe Jane Loren");

    let bin = verification.resolve_card_bin("539983").await.unwrap().into_data();
    assert_eq!(bin.card_type.as_deref(), Some("DEBIT"));

    let params = ListBanks { country: Some("nigeria".into()), ..ListBanks::default() };
    let banks = verification.list_banks(&params).await.unwrap().into_data();
    assert_eq!(banks[0].code, "801");
}

#[tokio::test]
async fn unexpected_shape_is_decode_error() {
    let mock = ApiMock::start().await;
    mock.mock(MockEndpoint::ok("GET", "/transfer/TRF_x", json!({ "id": "not-a-number" }))).await;

    let err = paystack(&mock).transfers().fetch("TRF_x").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(ErrorCategory::from(&err), ErrorCategory::Decode);
}

#[tokio::test]
async fn server_errors_are_retryable() {
    let mock = ApiMock::start().await;
    mock.mock(MockEndpoint::error("GET", "/split/7", 503, "Service unavailable")).await;

    let err = paystack(&mock).splits().fetch(7).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
    mock.assert_request_count(1).await;
}
