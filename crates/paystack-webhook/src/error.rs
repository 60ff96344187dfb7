//! Error taxonomy for webhook processing.
//!
//! Each failure maps to the gate that rejected the delivery: the signature
//! gate (`W1001`, `W1002`), the classification gate (`W1003`..`W1005`) or the
//! registered handler (`W1006`).

use std::fmt;

use paystack_core::EventKind;
use thiserror::Error;

use crate::{processor::ProcessingStage, registry::HandlerError};

/// Result type alias using `WebhookError`.
pub type Result<T> = std::result::Result<T, WebhookError>;

/// Why a delivery could not be turned into an [`paystack_core::Event`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Body is not syntactically valid JSON.
    #[error("malformed body: {message}")]
    MalformedBody {
        /// Parser diagnostic, including line and column.
        message: String,
    },

    /// Discriminator is missing, not a string, or not in the catalog.
    #[error("unknown event kind: {}", .kind.as_deref().unwrap_or("<missing>"))]
    UnknownEventKind {
        /// The discriminator value, if the body carried a string one.
        kind: Option<String>,
    },

    /// Discriminator matched but the payload violates the kind's shape.
    #[error("schema mismatch for {kind}: {details}")]
    SchemaMismatch {
        /// The matched kind.
        kind: EventKind,
        /// Field-level diagnostic.
        details: String,
    },
}

impl ValidationFailure {
    /// Creates a malformed body failure.
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody { message: message.into() }
    }

    /// Creates an unknown kind failure.
    pub fn unknown_kind(kind: Option<String>) -> Self {
        Self::UnknownEventKind { kind }
    }

    /// Creates a schema mismatch failure.
    pub fn schema_mismatch(kind: EventKind, details: impl Into<String>) -> Self {
        Self::SchemaMismatch { kind, details: details.into() }
    }

    /// Returns the failure reason.
    pub const fn reason(&self) -> FailureReason {
        match self {
            Self::MalformedBody { .. } => FailureReason::MalformedBody,
            Self::UnknownEventKind { .. } => FailureReason::UnknownEventKind,
            Self::SchemaMismatch { .. } => FailureReason::SchemaMismatch,
        }
    }
}

/// Error returned by [`crate::WebhookProcessor::process`].
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No signature value was supplied.
    #[error("[W1001] Missing signature: delivery carried no signature value")]
    MissingSignature,

    /// Signature does not match the body under the secret key.
    #[error("[W1002] Invalid signature: HMAC-SHA512 verification failed")]
    InvalidSignature,

    /// Body is not valid JSON.
    #[error("[W1003] Malformed body: {message}")]
    MalformedBody {
        /// Parser diagnostic.
        message: String,
    },

    /// Body names no kind in the catalog.
    #[error("[W1004] Unknown event kind: {}", .kind.as_deref().unwrap_or("<missing>"))]
    UnknownEventKind {
        /// The discriminator value, if the body carried a string one.
        kind: Option<String>,
    },

    /// Payload does not match the shape of its kind.
    #[error("[W1005] Schema mismatch for {kind}: {details}")]
    SchemaMismatch {
        /// The matched kind.
        kind: EventKind,
        /// Field-level diagnostic.
        details: String,
    },

    /// The registered handler returned an error.
    #[error("[W1006] Handler for {kind} failed: {source}")]
    Handler {
        /// Kind whose handler failed.
        kind: EventKind,
        /// Error returned by the handler.
        source: HandlerError,
    },
}

impl WebhookError {
    /// Creates a handler failure.
    pub fn handler(kind: EventKind, source: HandlerError) -> Self {
        Self::Handler { kind, source }
    }

    /// Returns the error code (W1001-W1006).
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingSignature => "W1001",
            Self::InvalidSignature => "W1002",
            Self::MalformedBody { .. } => "W1003",
            Self::UnknownEventKind { .. } => "W1004",
            Self::SchemaMismatch { .. } => "W1005",
            Self::Handler { .. } => "W1006",
        }
    }

    /// Returns the failure reason.
    pub const fn reason(&self) -> FailureReason {
        match self {
            Self::MissingSignature => FailureReason::MissingSignature,
            Self::InvalidSignature => FailureReason::InvalidSignature,
            Self::MalformedBody { .. } => FailureReason::MalformedBody,
            Self::UnknownEventKind { .. } => FailureReason::UnknownEventKind,
            Self::SchemaMismatch { .. } => FailureReason::SchemaMismatch,
            Self::Handler { .. } => FailureReason::HandlerFailed,
        }
    }

    /// Last stage the delivery reached before failing.
    pub const fn stage(&self) -> ProcessingStage {
        match self {
            Self::MissingSignature | Self::InvalidSignature => ProcessingStage::Unverified,
            Self::MalformedBody { .. }
            | Self::UnknownEventKind { .. }
            | Self::SchemaMismatch { .. } => ProcessingStage::Verified,
            Self::Handler { .. } => ProcessingStage::Classified,
        }
    }

    /// Whether the delivery was authentic and well-formed but names a kind
    /// this version does not know.
    ///
    /// Callers that prefer to acknowledge and ignore new kinds can branch on
    /// this instead of matching variants.
    pub const fn is_forward_compatible(&self) -> bool {
        matches!(self, Self::UnknownEventKind { .. })
    }

    /// Whether the delivery failed authentication.
    pub const fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::MissingSignature | Self::InvalidSignature)
    }
}

impl From<ValidationFailure> for WebhookError {
    fn from(failure: ValidationFailure) -> Self {
        match failure {
            ValidationFailure::MalformedBody { message } => Self::MalformedBody { message },
            ValidationFailure::UnknownEventKind { kind } => Self::UnknownEventKind { kind },
            ValidationFailure::SchemaMismatch { kind, details } => {
                Self::SchemaMismatch { kind, details }
            },
        }
    }
}

/// Reason code of a processing failure, without its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// See [`WebhookError::MissingSignature`].
    MissingSignature,
    /// See [`WebhookError::InvalidSignature`].
    InvalidSignature,
    /// See [`WebhookError::MalformedBody`].
    MalformedBody,
    /// See [`WebhookError::UnknownEventKind`].
    UnknownEventKind,
    /// See [`WebhookError::SchemaMismatch`].
    SchemaMismatch,
    /// See [`WebhookError::Handler`].
    HandlerFailed,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSignature => write!(f, "missing_signature"),
            Self::InvalidSignature => write!(f, "invalid_signature"),
            Self::MalformedBody => write!(f, "malformed_body"),
            Self::UnknownEventKind => write!(f, "unknown_event_kind"),
            Self::SchemaMismatch => write!(f, "schema_mismatch"),
            Self::HandlerFailed => write!(f, "handler_failed"),
        }
    }
}
