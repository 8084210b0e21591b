//! # Core handler trait
//!
//! [`Handle`] is the extension point for plugging event handlers into the
//! bus. One registered handler serves both dispatch paths:
//!
//! - the **synchronous** path calls [`Handle::on_event`] with the event and
//!   an optional opaque callback value, passed through verbatim;
//! - the **sequential** path awaits [`Handle::on_event_wait`]; resolving the
//!   future is the handler's continuation, and it resolves exactly once with
//!   either optional data or a [`HandlerError`].
//!
//! ## Contract
//! - `on_event` runs inline inside `emit`; a panic propagates to the caller
//!   of `emit` (the bus does not catch it).
//! - `on_event_wait` must eventually resolve; a future that never does
//!   stalls only its own `emit_wait` chain.
//! - Handlers may call back into the bus (`on`, `off`, `emit`, `cancel`)
//!   re-entrantly; the in-flight snapshot is unaffected.

use async_trait::async_trait;
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;

use crate::error::HandlerError;
use crate::events::Event;

/// Opaque callback value forwarded verbatim on the synchronous path.
///
/// The bus never inspects it; handlers that care downcast it.
pub type Callback = dyn Any + Send + Sync;

/// Shared reference to a registered handler.
///
/// Registration identity is per *registration*, not per handler value: the
/// same `HandlerRef` may be registered twice and each registration gets its
/// own [`StopHandle`](crate::StopHandle).
pub type HandlerRef = Arc<dyn Handle>;

/// Contract for event handlers.
///
/// Implement both methods for handlers that participate in sequential
/// dispatch; the default `on_event_wait` delegates to the synchronous form
/// and completes with no data.
#[async_trait]
pub trait Handle: Send + Sync + 'static {
    /// Handles one event on the synchronous path.
    ///
    /// # Parameters
    /// - `event`: the event being propagated (never mutated by the bus)
    /// - `callback`: opaque value the emitter attached, if any
    fn on_event(&self, event: &Event, callback: Option<&Callback>);

    /// Handles one event on the sequential path.
    ///
    /// Completing with `Ok(Some(data))` contributes `data` to the
    /// accumulated results; `Ok(None)` contributes nothing; `Err` stops the
    /// chain — handlers after this one are never invoked.
    async fn on_event_wait(&self, event: &Event) -> Result<Option<Value>, HandlerError> {
        self.on_event(event, None);
        Ok(None)
    }

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl std::fmt::Debug for dyn Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
