//! Top-level client wiring one secret key to every resource and to the
//! webhook processor.

use anyhow::Context;
use paystack_core::SecretKey;
use paystack_webhook::WebhookProcessor;

use crate::{
    client::{ClientConfig, HttpClient},
    config::Config,
    error::Result,
    resources::{DedicatedAccounts, Recipients, Splits, Transactions, Transfers, Verification},
};

/// Paystack API client.
///
/// Outbound requests authenticate with the secret key as a bearer token; the
/// webhook processor verifies inbound deliveries with the same key.
///
/// # Example
///
/// ```no_run
/// use paystack_client::{resources::transactions::InitializeTransaction, Paystack};
/// use paystack_core::SecretKey;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let paystack = Paystack::new(SecretKey::new("sk_test_...")?)?;
///
/// let params = InitializeTransaction {
///     email: "customer@email.com".into(),
///     amount: 20000,
///     ..Default::default()
/// };
/// let session = paystack.transactions().initialize(&params).await?.into_data();
/// println!("redirect to {}", session.authorization_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Paystack {
    http: HttpClient,
    webhooks: WebhookProcessor,
}

impl Paystack {
    /// Creates a client against the production API.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the HTTP client cannot be built.
    pub fn new(secret: SecretKey) -> Result<Self> {
        Self::with_config(secret, ClientConfig::default())
    }

    /// Creates a client with a custom exchanger configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the configuration is invalid.
    pub fn with_config(secret: SecretKey, config: ClientConfig) -> Result<Self> {
        let webhooks = WebhookProcessor::new(secret.clone());
        let http = HttpClient::new(secret, config)?;
        Ok(Self { http, webhooks })
    }

    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key or the exchanger configuration is
    /// invalid.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let secret = config.secret_key().context("Invalid secret key")?;
        let mut client = Self::with_config(secret, config.to_client_config())
            .context("Failed to build HTTP client")?;
        client.webhooks = client.webhooks.with_signature_header(&config.signature_header);
        Ok(client)
    }

    /// Transactions resource.
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(&self.http)
    }

    /// Transfers resource.
    pub fn transfers(&self) -> Transfers<'_> {
        Transfers::new(&self.http)
    }

    /// Transfer recipients resource.
    pub fn recipients(&self) -> Recipients<'_> {
        Recipients::new(&self.http)
    }

    /// Transaction splits resource.
    pub fn splits(&self) -> Splits<'_> {
        Splits::new(&self.http)
    }

    /// Dedicated virtual accounts resource.
    pub fn dedicated_accounts(&self) -> DedicatedAccounts<'_> {
        DedicatedAccounts::new(&self.http)
    }

    /// Verification resource.
    pub fn verification(&self) -> Verification<'_> {
        Verification::new(&self.http)
    }

    /// Webhook processor keyed with this client's secret.
    pub fn webhooks(&self) -> &WebhookProcessor {
        &self.webhooks
    }

    /// Webhook processor for registering handlers.
    pub fn webhooks_mut(&mut self) -> &mut WebhookProcessor {
        &mut self.webhooks
    }

    /// Underlying HTTP exchanger, for endpoints without a resource module.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
