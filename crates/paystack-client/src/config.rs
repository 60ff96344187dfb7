//! Configuration for the Paystack client.

use std::{fmt, time::Duration};

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use paystack_core::SecretKey;
use paystack_webhook::SIGNATURE_HEADER;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

const CONFIG_FILE: &str = "paystack.toml";

const ENV_PREFIX: &str = "PAYSTACK_";

/// Client configuration with defaults, file, and environment overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables prefixed `PAYSTACK_` (highest priority)
/// 2. Configuration file (`paystack.toml`)
/// 3. Built-in defaults (lowest priority)
///
/// Only the secret key has no usable default.
///
/// # Example
///
/// ```no_run
/// use paystack_client::Config;
///
/// // PAYSTACK_SECRET_KEY=sk_test_... in the environment
/// let config = Config::load().expect("Failed to load configuration");
///
/// println!("Requests go to {}", config.base_url);
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Integration secret key.
    ///
    /// Environment variable: `PAYSTACK_SECRET_KEY`
    ///
    /// Never serialized.
    #[serde(default, skip_serializing)]
    pub secret_key: String,
    /// API base URL.
    ///
    /// Environment variable: `PAYSTACK_BASE_URL`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    ///
    /// Environment variable: `PAYSTACK_TIMEOUT_SECONDS`
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// User agent sent with every request.
    ///
    /// Environment variable: `PAYSTACK_USER_AGENT`
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Header carrying webhook signatures.
    ///
    /// Environment variable: `PAYSTACK_SIGNATURE_HEADER`
    #[serde(default = "default_signature_header")]
    pub signature_header: String,
    /// Log filter for binaries.
    ///
    /// Environment variable: `PAYSTACK_LOG_LEVEL`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from defaults, `paystack.toml`, and environment
    /// variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to parse or the result does not
    /// pass validation.
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(Self::default()))
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Load configuration from a specific file instead of `paystack.toml`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(Self::default()))
                .merge(Toml::file(path.as_ref()))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Extract and validate configuration from an assembled figment.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction or validation fails.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract().context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to the HTTP exchanger's configuration.
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Wrap the configured secret key.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSecretKey` if the key is empty.
    pub fn secret_key(&self) -> paystack_core::Result<SecretKey> {
        SecretKey::new(self.secret_key.clone())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.trim().is_empty() {
            anyhow::bail!("secret_key must be set (PAYSTACK_SECRET_KEY)");
        }

        if self.timeout_seconds == 0 {
            anyhow::bail!("timeout_seconds must be greater than 0");
        }

        Url::parse(&self.base_url)
            .with_context(|| format!("base_url is not a valid URL: {}", self.base_url))?;

        if self.signature_header.trim().is_empty() {
            anyhow::bail!("signature_header must not be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            signature_header: default_signature_header(),
            log_level: default_log_level(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("signature_header", &self.signature_header)
            .field("log_level", &self.log_level)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_signature_header() -> String {
    SIGNATURE_HEADER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
