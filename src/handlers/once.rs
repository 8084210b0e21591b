//! # Exactly-once wrapper.
//!
//! [`OnceHandler`] adapts a handler so it is delivered at most once, with
//! **stop-before-invoke** ordering: on first delivery the wrapper fires its
//! own [`StopHandle`] *before* running the wrapped handler. Removal therefore
//! happens even if the wrapped handler panics or re-enters the bus, and a
//! re-entrant emit of the same type cannot deliver the wrapper twice.
//!
//! The stop handle only exists after registration returns, so the wrapper is
//! created first, registered, then bound via [`OnceHandler::bind`]. The
//! atomic fired flag covers the window in between and any stale snapshot
//! that still holds the wrapper after removal.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::bus::StopHandle;
use crate::error::HandlerError;
use crate::events::Event;
use crate::handlers::{Callback, Handle, HandlerRef};

/// Wrapper created by [`EventBus::once`](crate::EventBus::once).
pub(crate) struct OnceHandler {
    inner: HandlerRef,
    fired: AtomicBool,
    stop: OnceLock<StopHandle>,
}

impl OnceHandler {
    pub(crate) fn new(inner: HandlerRef) -> Self {
        Self {
            inner,
            fired: AtomicBool::new(false),
            stop: OnceLock::new(),
        }
    }

    /// Binds the stop handle produced by this wrapper's own registration.
    pub(crate) fn bind(&self, stop: StopHandle) {
        // Only ever called once, right after registration.
        let _ = self.stop.set(stop);
    }

    /// Claims the single delivery; unregisters on first claim.
    fn claim(&self) -> bool {
        if self.fired.swap(true, Ordering::SeqCst) {
            return false;
        }
        if let Some(stop) = self.stop.get() {
            stop.stop();
        }
        true
    }
}

#[async_trait]
impl Handle for OnceHandler {
    fn on_event(&self, event: &Event, callback: Option<&Callback>) {
        if self.claim() {
            self.inner.on_event(event, callback);
        }
    }

    async fn on_event_wait(&self, event: &Event) -> Result<Option<Value>, HandlerError> {
        if self.claim() {
            self.inner.on_event_wait(event).await
        } else {
            Ok(None)
        }
    }

    fn name(&self) -> &'static str {
        "once_handler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::handler_fn;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn test_second_delivery_is_dropped() {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let once = OnceHandler::new(handler_fn(move |_ev, _cb| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        let ev = Event::new("FOO");
        once.on_event(&ev, None);
        once.on_event(&ev, None);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_spent_wrapper_completes_with_no_data() {
        let once = OnceHandler::new(crate::handlers::wait_fn(|_ev| {
            Ok(Some(serde_json::json!(1)))
        }));

        let ev = Event::new("FOO");
        assert_eq!(
            once.on_event_wait(&ev).await.unwrap(),
            Some(serde_json::json!(1))
        );
        // Stale snapshot delivering again: inert, no data.
        assert_eq!(once.on_event_wait(&ev).await.unwrap(), None);
    }
}
