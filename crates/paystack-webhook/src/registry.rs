//! Handler registry and dispatcher.
//!
//! Holds at most one handler per [`EventKind`]. Handlers are registered
//! through a kind marker from [`paystack_core::kinds`], which fixes the
//! payload type the handler receives; the registry erases that type behind a
//! boxed closure that extracts the payload from the matching [`Event`].

use std::{collections::HashMap, error::Error, fmt, future::Future};

use futures::future::{self, BoxFuture, FutureExt};
use paystack_core::{Event, EventKind, EventKindMarker};
use tracing::{debug, warn};

use crate::error::{Result, WebhookError};

/// Error a handler may return.
pub type HandlerError = Box<dyn Error + Send + Sync>;

/// Result of a handler invocation.
pub type HandlerResult = std::result::Result<(), HandlerError>;

type BoxedHandler = Box<dyn Fn(Event) -> BoxFuture<'static, HandlerResult> + Send + Sync>;

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The registered handler ran to completion.
    Handled,
    /// No handler is registered for the event's kind.
    NoHandler,
}

/// Mapping from event kind to its single registered handler.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, BoxedHandler>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for the kind selected by `K`.
    ///
    /// Replaces any handler previously registered for the same kind.
    pub fn register<K, F, Fut>(&mut self, _kind: K, handler: F) -> &mut Self
    where
        K: EventKindMarker,
        F: Fn(K::Data) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        let boxed: BoxedHandler = Box::new(move |event| match K::extract(event) {
            Some(data) => handler(data).boxed(),
            // Keyed by K::KIND, so dispatch never routes another kind here.
            None => future::ready(Ok(())).boxed(),
        });

        if self.handlers.insert(K::KIND, boxed).is_some() {
            warn!(event_kind = %K::KIND, "Replaced previously registered handler");
        } else {
            debug!(event_kind = %K::KIND, "Registered handler");
        }

        self
    }

    /// Removes the handler for `kind`, returning whether one was registered.
    pub fn unregister(&mut self, kind: EventKind) -> bool {
        self.handlers.remove(&kind).is_some()
    }

    /// Whether a handler is registered for `kind`.
    pub fn contains(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Number of kinds with a registered handler.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Kinds with a registered handler, in catalog order.
    pub fn kinds(&self) -> Vec<EventKind> {
        let mut kinds: Vec<_> = self.handlers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Invokes the handler registered for the event's kind and awaits it.
    ///
    /// An event whose kind has no handler is not an error.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::Handler` if the handler returns an error.
    pub async fn dispatch(&self, event: Event) -> Result<DispatchOutcome> {
        let kind = event.kind();

        let Some(handler) = self.handlers.get(&kind) else {
            debug!(event_kind = %kind, "No handler registered");
            return Ok(DispatchOutcome::NoHandler);
        };

        handler(event).await.map_err(|source| {
            warn!(event_kind = %kind, error = %source, "Handler failed");
            WebhookError::handler(kind, source)
        })?;

        Ok(DispatchOutcome::Handled)
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry").field("kinds", &self.kinds()).finish()
    }
}
