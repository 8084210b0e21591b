//! # Fan-out strategies over listener snapshots.
//!
//! A reaction consumes the listener sequence the bus resolves for an event
//! and owns the fan-out algorithm: concurrent join, ordered sequential
//! invocation, or anything a caller declares. The bus's only
//! responsibilities are snapshotting the right listener list, keeping
//! reaction names from shadowing its own dispatch methods, and passing the
//! snapshot through unmodified — empty case included.
//!
//! ## Architecture
//! ```text
//! bus.react("parallel", &event)
//!     │ resolve + snapshot
//!     ▼
//! ReactionSet["parallel"].run(listeners, &event)
//!     ├─ Parallel: start all wait futures, join, results in order
//!     └─ Series:   one at a time, first error short-circuits
//! ```
//!
//! ## Contract
//! - A reaction answers an empty snapshot with
//!   [`WaitOutcome::Unhandled`](crate::WaitOutcome::Unhandled) carrying the
//!   original event.
//! - The table is declared at construction and immutable afterwards;
//!   protected and duplicate names are rejected at build time.
//!
//! ## Declaring custom reactions
//! ```rust
//! use evbus::{BusError, Event, EventBus, HandlerRef, React, WaitOutcome};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct FirstOnly;
//!
//! #[async_trait]
//! impl React for FirstOnly {
//!     fn name(&self) -> &'static str {
//!         "first_only"
//!     }
//!
//!     async fn run(
//!         &self,
//!         listeners: Vec<HandlerRef>,
//!         event: &Event,
//!     ) -> Result<WaitOutcome, BusError> {
//!         match listeners.first() {
//!             None => Ok(WaitOutcome::Unhandled(event.clone())),
//!             Some(h) => {
//!                 let data = h.on_event_wait(event).await?;
//!                 Ok(WaitOutcome::Completed(data.into_iter().collect()))
//!             }
//!         }
//!     }
//! }
//!
//! let bus = EventBus::builder()
//!     .with_reaction(Arc::new(FirstOnly))
//!     .build()
//!     .unwrap();
//! ```

mod parallel;
mod react;
mod series;

pub use parallel::Parallel;
pub use react::React;
pub use series::Series;

pub(crate) use react::ReactionSet;
