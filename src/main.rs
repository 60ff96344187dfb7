//! `paystack-inspect`: runs a captured webhook delivery through the
//! verification and classification gates.
//!
//! ```text
//! paystack-inspect --body delivery.json --signature 3c5f...
//! paystack-inspect --body delivery.json --sign
//! ```
//!
//! The secret key comes from the usual configuration sources
//! (`PAYSTACK_SECRET_KEY`, `paystack.toml`). Results are printed as JSON on
//! stdout; logs go to stderr.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use paystack::{webhook::sign, Config, WebhookProcessor};
use serde_json::{json, Value};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "paystack-inspect", version, about = "Verify and classify a captured webhook")]
struct Cli {
    /// File holding the raw delivery body.
    #[arg(long)]
    body: PathBuf,

    /// Signature the delivery carried (`x-paystack-signature`).
    #[arg(long, conflicts_with = "sign")]
    signature: Option<String>,

    /// Print the signature the body would carry instead of inspecting it.
    #[arg(long)]
    sign: bool,

    /// Configuration file to use instead of `paystack.toml`.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::load()?,
    };
    init_tracing(&config.log_level);

    let body = std::fs::read(&cli.body)
        .with_context(|| format!("Failed to read body from {}", cli.body.display()))?;
    let secret = config.secret_key().context("Invalid secret key")?;
    info!(body_len = body.len(), mode = if secret.is_live() { "live" } else { "test" }, "Loaded");

    if cli.sign {
        let signature = sign(&body, &secret).context("Failed to sign body")?;
        print_json(&json!({ "signature": signature }))?;
        return Ok(ExitCode::SUCCESS);
    }

    let processor = WebhookProcessor::new(secret);
    let (summary, accepted) = inspect(&processor, &body, cli.signature.as_deref()).await;
    print_json(&summary)?;

    Ok(if accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Runs `body` through the processor and summarizes the outcome.
///
/// Returns the summary and whether the delivery was accepted.
async fn inspect(
    processor: &WebhookProcessor,
    body: &[u8],
    signature: Option<&str>,
) -> (Value, bool) {
    match processor.process(body, signature).await {
        Ok(event) => {
            debug!(event_kind = %event.kind(), "Delivery accepted");
            let data = event.data_value().unwrap_or(Value::Null);
            let summary = json!({
                "verified": true,
                "kind": event.kind().as_str(),
                "family": event.kind().family(),
                "data": data,
            });
            (summary, true)
        },
        Err(e) => {
            debug!(code = e.code(), "Delivery rejected");
            let summary = json!({
                "verified": !e.is_authentication_failure(),
                "code": e.code(),
                "reason": e.reason().to_string(),
                "stage": format!("{:?}", e.stage()),
                "error": e.to_string(),
            });
            (summary, false)
        },
    }
}

fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{rendered}");
    Ok(())
}

/// Initializes tracing on stderr, preferring `RUST_LOG` over the configured
/// level.
fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

#[cfg(test)]
mod tests {
    use paystack::{webhook::sign, SecretKey};

    use super::*;

    fn processor() -> (WebhookProcessor, SecretKey) {
        let secret = SecretKey::new("sk_test_inspect").unwrap();
        (WebhookProcessor::new(secret.clone()), secret)
    }

    #[test]
    fn cli_rejects_sign_with_signature() {
        let result = Cli::try_parse_from([
            "paystack-inspect",
            "--body",
            "delivery.json",
            "--sign",
            "--signature",
            "abc",
        ]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unknown_kind_summary() {
        let (processor, secret) = processor();
        let body = br#"{"event":"some.unknown.kind","data":{}}"#;
        let signature = sign(body, &secret).unwrap();

        let (summary, accepted) = inspect(&processor, body, Some(&signature)).await;

        assert!(!accepted);
        assert_eq!(summary["verified"], true);
        assert_eq!(summary["code"], "W1004");
        assert_eq!(summary["reason"], "unknown_event_kind");
    }

    #[tokio::test]
    async fn forged_delivery_is_unverified() {
        let (processor, _) = processor();
        let body = br#"{"event":"charge.success","data":{}}"#;

        let (summary, accepted) = inspect(&processor, body, Some("deadbeef")).await;

        assert!(!accepted);
        assert_eq!(summary["verified"], false);
        assert_eq!(summary["code"], "W1002");
        assert_eq!(summary["stage"], "Unverified");
    }
}
