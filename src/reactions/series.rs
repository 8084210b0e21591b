//! # Ordered sequential fan-out.
//!
//! One handler in flight at a time, first error short-circuits — the same
//! protocol as [`EventBus::emit_wait`](crate::EventBus::emit_wait), exposed
//! as a named strategy so callers composing reactions by name get the
//! sequential behavior too.

use async_trait::async_trait;

use crate::bus::{dispatch_sequential, WaitOutcome};
use crate::error::BusError;
use crate::events::Event;
use crate::handlers::HandlerRef;
use crate::reactions::React;

/// Strictly sequential fan-out strategy. Dispatched as `"series"`.
pub struct Series;

#[async_trait]
impl React for Series {
    fn name(&self) -> &'static str {
        "series"
    }

    async fn run(
        &self,
        listeners: Vec<HandlerRef>,
        event: &Event,
    ) -> Result<WaitOutcome, BusError> {
        if listeners.is_empty() {
            return Ok(WaitOutcome::Unhandled(event.clone()));
        }
        let results = dispatch_sequential(&listeners, event).await?;
        Ok(WaitOutcome::Completed(results))
    }
}
