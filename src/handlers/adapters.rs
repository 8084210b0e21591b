//! # Closure adapters for [`Handle`].
//!
//! Most handlers are small; these adapters lift plain closures into
//! [`HandlerRef`]s without a named type per handler.
//!
//! - [`handler_fn`] — synchronous closure `(event, callback)`; on the
//!   sequential path it runs inline and contributes no data.
//! - [`wait_fn`] — completion closure `(event) -> Result<Option<Value>, _>`;
//!   its return value is the continuation payload on the sequential path.
//!   On the synchronous path it runs for effect and the result is dropped.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::error::HandlerError;
use crate::events::Event;
use crate::handlers::{Callback, Handle, HandlerRef};

/// Synchronous closure handler. Built by [`handler_fn`].
struct FnHandler<F> {
    f: F,
}

#[async_trait]
impl<F> Handle for FnHandler<F>
where
    F: Fn(&Event, Option<&Callback>) + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event, callback: Option<&Callback>) {
        (self.f)(event, callback);
    }

    fn name(&self) -> &'static str {
        "fn_handler"
    }
}

/// Wraps a synchronous closure as a [`HandlerRef`].
///
/// # Example
/// ```
/// use evbus::{handler_fn, Event, EventBus};
///
/// let bus = EventBus::default();
/// let _stop = bus.on("FOO", handler_fn(|event, _cb| {
///     println!("got {:?}", event.type_tag());
/// }));
/// ```
pub fn handler_fn<F>(f: F) -> HandlerRef
where
    F: Fn(&Event, Option<&Callback>) + Send + Sync + 'static,
{
    Arc::new(FnHandler { f })
}

/// Completion closure handler. Built by [`wait_fn`].
struct WaitFnHandler<F> {
    f: F,
}

#[async_trait]
impl<F> Handle for WaitFnHandler<F>
where
    F: Fn(&Event) -> Result<Option<Value>, HandlerError> + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event, _callback: Option<&Callback>) {
        // Sync path has no data/error channel; run for effect only.
        let _ = (self.f)(event);
    }

    async fn on_event_wait(&self, event: &Event) -> Result<Option<Value>, HandlerError> {
        (self.f)(event)
    }

    fn name(&self) -> &'static str {
        "wait_fn_handler"
    }
}

/// Wraps a completion closure as a [`HandlerRef`] for sequential dispatch.
///
/// The closure completes immediately; handlers that need to await I/O should
/// implement [`Handle`] directly.
///
/// # Example
/// ```
/// use evbus::{wait_fn, EventBus};
/// use serde_json::json;
///
/// let bus = EventBus::default();
/// let _stop = bus.on("FOO", wait_fn(|_event| Ok(Some(json!(1)))));
/// ```
pub fn wait_fn<F>(f: F) -> HandlerRef
where
    F: Fn(&Event) -> Result<Option<Value>, HandlerError> + Send + Sync + 'static,
{
    Arc::new(WaitFnHandler { f })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_handler_fn_invokes_closure() {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let handler = handler_fn(move |_ev, _cb| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        handler.on_event(&Event::new("FOO"), None);
        handler.on_event(&Event::new("FOO"), None);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_wait_fn_returns_data_on_wait_path() {
        let handler = wait_fn(|_ev| Ok(Some(serde_json::json!("data"))));
        let out = handler.on_event_wait(&Event::new("FOO")).await.unwrap();
        assert_eq!(out, Some(serde_json::json!("data")));
    }

    #[tokio::test]
    async fn test_wait_fn_propagates_error() {
        let handler = wait_fn(|_ev| Err(HandlerError::new("boom")));
        let err = handler.on_event_wait(&Event::new("FOO")).await.unwrap_err();
        assert_eq!(err.reason(), "boom");
    }

    #[tokio::test]
    async fn test_default_wait_path_delegates_to_sync() {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let handler = handler_fn(move |_ev, _cb| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let out = handler.on_event_wait(&Event::new("FOO")).await.unwrap();
        assert_eq!(out, None);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
