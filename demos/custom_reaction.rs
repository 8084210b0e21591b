//! Reactions: built-in parallel/series strategies plus a custom one.
//!
//! Run with: `cargo run --example custom_reaction`

use std::sync::Arc;

use async_trait::async_trait;
use evbus::{BusError, Event, EventBus, HandlerRef, React, WaitOutcome};
use serde_json::json;

/// Invokes only the most recently registered listener.
struct LastOnly;

#[async_trait]
impl React for LastOnly {
    fn name(&self) -> &'static str {
        "last_only"
    }

    async fn run(
        &self,
        listeners: Vec<HandlerRef>,
        event: &Event,
    ) -> Result<WaitOutcome, BusError> {
        match listeners.last() {
            None => Ok(WaitOutcome::Unhandled(event.clone())),
            Some(handler) => {
                let data = handler.on_event_wait(event).await?;
                Ok(WaitOutcome::Completed(data.into_iter().collect()))
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = EventBus::builder()
        .with_default_reactions()
        .with_reaction(Arc::new(LastOnly))
        .build()?;

    println!("strategies: {:?}", bus.reaction_names());

    for tag in ["a", "b", "c"] {
        let _stop = bus.on_wait_fn("probe", move |_event| Ok(Some(json!(tag))));
    }

    let event = Event::new("probe");
    for name in ["parallel", "series", "last_only"] {
        match bus.react(name, &event).await? {
            WaitOutcome::Completed(results) => println!("[{name}] {results:?}"),
            WaitOutcome::Unhandled(_) => println!("[{name}] unhandled"),
        }
    }

    Ok(())
}
