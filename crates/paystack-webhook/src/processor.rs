//! Top-level webhook processing.
//!
//! A delivery moves through four stages and stops at the first gate that
//! rejects it:
//!
//! ```text
//!   Unverified ──verify──▶ Verified ──classify──▶ Classified ──dispatch──▶ Dispatched
//!       │                     │                       │
//!       ▼                     ▼                       ▼
//!   MissingSignature      MalformedBody           Handler
//!   InvalidSignature      UnknownEventKind
//!                         SchemaMismatch
//! ```
//!
//! The signature gate runs before the body is parsed.

use std::future::Future;

use http::HeaderMap;
use paystack_core::{Event, EventKind, EventKindMarker, SecretKey};
use tracing::{debug, info_span, warn, Instrument, Span};

use crate::{
    classify::classify,
    crypto::{self, SignatureError, SIGNATURE_HEADER},
    error::{Result, ValidationFailure, WebhookError},
    registry::{HandlerRegistry, HandlerResult},
};

/// Stage a delivery has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProcessingStage {
    /// Received, signature not yet checked.
    Unverified,
    /// Signature matched the body.
    Verified,
    /// Body validated into an [`Event`].
    Classified,
    /// Handler (if any) completed.
    Dispatched,
}

/// Verifies, classifies and dispatches webhook deliveries.
///
/// Handlers are registered with [`on`](Self::on) during setup; `process`
/// takes `&self`, so a processor can be shared behind an `Arc` once
/// registration is done.
#[derive(Debug)]
pub struct WebhookProcessor {
    secret: SecretKey,
    registry: HandlerRegistry,
    signature_header: String,
}

impl WebhookProcessor {
    /// Creates a processor keyed with the integration secret key.
    pub fn new(secret: SecretKey) -> Self {
        Self {
            secret,
            registry: HandlerRegistry::new(),
            signature_header: SIGNATURE_HEADER.to_string(),
        }
    }

    /// Reads the signature from `header` instead of `x-paystack-signature`
    /// in [`process_request`](Self::process_request).
    #[must_use]
    pub fn with_signature_header(mut self, header: impl Into<String>) -> Self {
        self.signature_header = header.into().to_ascii_lowercase();
        self
    }

    /// Header the signature is read from.
    pub fn signature_header(&self) -> &str {
        &self.signature_header
    }

    /// Registers `handler` for the kind selected by `kind`.
    ///
    /// The handler receives only that kind's payload. Registering again for
    /// the same kind replaces the earlier handler.
    pub fn on<K, F, Fut>(&mut self, kind: K, handler: F) -> &mut Self
    where
        K: EventKindMarker,
        F: Fn(K::Data) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.registry.register(kind, handler);
        self
    }

    /// Whether a handler is registered for `kind`.
    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.registry.contains(kind)
    }

    /// Number of kinds with a registered handler.
    pub fn handler_count(&self) -> usize {
        self.registry.len()
    }

    /// Registered handlers.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Checks `signature` against `body` with this processor's key.
    pub fn verify(&self, body: &[u8], signature: &str) -> bool {
        crypto::verify(body, signature, &self.secret)
    }

    /// Computes the signature the service would send for `body`.
    ///
    /// # Errors
    ///
    /// Returns `SignatureError::InvalidKey` if the key is rejected by the MAC.
    pub fn sign(&self, body: &[u8]) -> std::result::Result<String, SignatureError> {
        crypto::sign(body, &self.secret)
    }

    /// Validates `body` against the catalog without checking a signature.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationFailure`] describing why the body was rejected.
    pub fn classify(&self, body: &[u8]) -> std::result::Result<Event, ValidationFailure> {
        classify(body)
    }

    /// Processes one delivery.
    ///
    /// `body` must be the exact bytes received; `signature` is the value of
    /// the signature header, `None` if the header was absent. On success the
    /// matching handler, if any, has completed and the validated event is
    /// returned whether or not a handler ran.
    ///
    /// # Errors
    ///
    /// - `MissingSignature` if `signature` is `None`. The body is not read.
    /// - `InvalidSignature` if the signature does not match. The body is not
    ///   parsed.
    /// - `MalformedBody`, `UnknownEventKind` or `SchemaMismatch` if
    ///   classification fails.
    /// - `Handler` if the registered handler returns an error.
    pub async fn process(&self, body: &[u8], signature: Option<&str>) -> Result<Event> {
        let span = info_span!(
            "webhook_process",
            body_len = body.len(),
            event_kind = tracing::field::Empty
        );

        async move {
            let Some(signature) = signature else {
                warn!("Rejected delivery without signature");
                return Err(WebhookError::MissingSignature);
            };

            if !self.verify(body, signature) {
                warn!(signature_len = signature.len(), "Rejected delivery with invalid signature");
                return Err(WebhookError::InvalidSignature);
            }
            debug!("Signature verified");

            let event = classify(body).map_err(|failure| {
                warn!(reason = %failure.reason(), "Rejected delivery: {}", failure);
                WebhookError::from(failure)
            })?;
            Span::current().record("event_kind", event.kind().as_str());
            debug!("Delivery classified");

            let outcome = self.registry.dispatch(event.clone()).await?;
            debug!(?outcome, "Delivery dispatched");

            Ok(event)
        }
        .instrument(span)
        .await
    }

    /// Processes a delivery, reading the signature from `headers`.
    ///
    /// A header whose value is not valid UTF-8 counts as absent.
    ///
    /// # Errors
    ///
    /// Same as [`process`](Self::process).
    pub async fn process_request(&self, headers: &HeaderMap, body: &[u8]) -> Result<Event> {
        let signature = crypto::signature_from_headers(headers, &self.signature_header);
        self.process(body, signature).await
    }
}
