//! # Concurrent fan-out.
//!
//! Starts every handler's wait future at once and joins them. Results keep
//! registration order regardless of completion order. When handlers fail,
//! the error of the earliest-registered failing handler wins; there is no
//! mid-flight cancellation of the others (they all run to completion
//! before the join resolves).

use async_trait::async_trait;
use futures::future::join_all;

use crate::bus::WaitOutcome;
use crate::error::BusError;
use crate::events::Event;
use crate::handlers::HandlerRef;
use crate::reactions::React;

/// Concurrent-join fan-out strategy. Dispatched as `"parallel"`.
pub struct Parallel;

#[async_trait]
impl React for Parallel {
    fn name(&self) -> &'static str {
        "parallel"
    }

    async fn run(
        &self,
        listeners: Vec<HandlerRef>,
        event: &Event,
    ) -> Result<WaitOutcome, BusError> {
        if listeners.is_empty() {
            return Ok(WaitOutcome::Unhandled(event.clone()));
        }

        let outcomes = join_all(listeners.iter().map(|h| h.on_event_wait(event))).await;

        let mut results = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            if let Some(data) = outcome? {
                results.push(data);
            }
        }
        Ok(WaitOutcome::Completed(results))
    }
}
