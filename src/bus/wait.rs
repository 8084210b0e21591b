//! # Sequential dispatch outcome and driver.
//!
//! The sequential path delivers one handler at a time: handler N+1 never
//! starts before handler N's future resolves. Resolving the future is the
//! handler's continuation; the first error short-circuits the chain.
//!
//! [`WaitOutcome`] encodes the documented zero-listener asymmetry: with no
//! listeners registered, the caller gets the original event back as a
//! "nothing happened" sentinel; with listeners, it gets the accumulated data
//! values. The two cases are distinct variants so they cannot be confused.

use serde_json::Value;

use crate::error::HandlerError;
use crate::events::Event;
use crate::handlers::HandlerRef;

/// Result of a completed sequential dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum WaitOutcome {
    /// No listeners were registered for the event's type; the original
    /// event is handed back untouched.
    Unhandled(Event),

    /// Every handler completed. Data values appear in invocation order
    /// (= registration order); handlers completing without data contribute
    /// nothing.
    Completed(Vec<Value>),
}

impl WaitOutcome {
    /// True when no listener was registered for the event's type.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, WaitOutcome::Unhandled(_))
    }

    /// The accumulated results, when the dispatch ran handlers.
    pub fn results(&self) -> Option<&[Value]> {
        match self {
            WaitOutcome::Completed(values) => Some(values),
            WaitOutcome::Unhandled(_) => None,
        }
    }

    /// Consumes the outcome, returning results (empty for the unhandled case).
    pub fn into_results(self) -> Vec<Value> {
        match self {
            WaitOutcome::Completed(values) => values,
            WaitOutcome::Unhandled(_) => Vec::new(),
        }
    }
}

/// Drives handlers strictly one at a time, accumulating their data.
///
/// Stops at the first handler error; the remaining handlers are never
/// invoked. The caller is responsible for the empty-snapshot sentinel.
pub(crate) async fn dispatch_sequential(
    listeners: &[HandlerRef],
    event: &Event,
) -> Result<Vec<Value>, HandlerError> {
    let mut results = Vec::with_capacity(listeners.len());
    for handler in listeners {
        if let Some(data) = handler.on_event_wait(event).await? {
            results.push(data);
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::wait_fn;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_results_accumulate_in_order() {
        let listeners = vec![
            wait_fn(|_ev| Ok(Some(json!(1)))),
            wait_fn(|_ev| Ok(Some(json!(2)))),
            wait_fn(|_ev| Ok(Some(json!(3)))),
        ];
        let out = dispatch_sequential(&listeners, &Event::new("FOO"))
            .await
            .unwrap();
        assert_eq!(out, vec![json!(1), json!(2), json!(3)]);
    }

    #[tokio::test]
    async fn test_handlers_without_data_contribute_nothing() {
        let listeners = vec![
            wait_fn(|_ev| Ok(Some(json!("a")))),
            wait_fn(|_ev| Ok(None)),
            wait_fn(|_ev| Ok(Some(json!("b")))),
        ];
        let out = dispatch_sequential(&listeners, &Event::new("FOO"))
            .await
            .unwrap();
        assert_eq!(out, vec![json!("a"), json!("b")]);
    }

    #[tokio::test]
    async fn test_error_short_circuits() {
        let third_ran = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&third_ran);
        let listeners = vec![
            wait_fn(|_ev| Ok(Some(json!(1)))),
            wait_fn(|_ev| Err(HandlerError::new("boom"))),
            wait_fn(move |_ev| {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(Some(json!(3)))
            }),
        ];

        let err = dispatch_sequential(&listeners, &Event::new("FOO"))
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "boom");
        assert_eq!(
            third_ran.load(Ordering::SeqCst),
            0,
            "handlers after the error must never run"
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let unhandled = WaitOutcome::Unhandled(Event::new("FOO"));
        assert!(unhandled.is_unhandled());
        assert_eq!(unhandled.results(), None);
        assert!(unhandled.into_results().is_empty());

        let done = WaitOutcome::Completed(vec![json!(1)]);
        assert!(!done.is_unhandled());
        assert_eq!(done.results(), Some(&[json!(1)][..]));
        assert_eq!(done.into_results(), vec![json!(1)]);
    }
}
