//! # evbus
//!
//! **evbus** is a lightweight in-process publish/subscribe event bus for Rust.
//!
//! It provides primitives to register handlers against an event-type key and
//! dispatch events to all matching handlers, with cooperative mid-propagation
//! cancellation on the synchronous path and strictly sequential delivery with
//! short-circuit error propagation on the asynchronous path. The crate is
//! designed as a building block for larger event-driven components.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Handler    │   │   Handler    │   │   Handler    │
//!     │ (user fn #1) │   │ (user fn #2) │   │ (once #3)    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ on / on_fn       │ on               │ once
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventBus                                                         │
//! │  - Registry     (event type → ordered handler list, id-guarded)   │
//! │  - EmitStack    (per-emit propagate flags for cancel())           │
//! │  - ReactionSet  (named fan-out strategies, declared at build)     │
//! └──────┬──────────────────────┬─────────────────────────┬───────────┘
//!        │ emit(&event)         │ emit_wait(&event).await │ react(name)
//!        ▼                      ▼                         ▼
//!  sync loop over          sequential loop,          Parallel / Series /
//!  snapshot, cancel        one handler in flight,    custom strategy over
//!  polls between calls     first error wins          the same snapshot
//! ```
//!
//! ### Dispatch lifecycle
//! ```text
//! emit(&event)
//!   ├─► resolve type (config resolver, else "type" tag → container tag
//!   │                 → primitive name; null ─► InvalidEvent)
//!   ├─► snapshot listener list (mutation during dispatch is invisible)
//!   ├─► push propagation frame {event identity, propagate = true}
//!   └─► for each handler, in registration order:
//!         ├─ propagate still true? ─ no ─► stop (cancel() was called)
//!         ├─ handler.on_event(&event, callback)
//!         └─ continue
//!
//! emit_wait(&event).await
//!   ├─► resolve + snapshot
//!   ├─ empty? ─► WaitOutcome::Unhandled(event)      (documented sentinel)
//!   └─► for each handler, strictly one at a time:
//!         ├─ handler.on_event_wait(&event).await
//!         ├─ Ok(Some(data)) ─► accumulate
//!         ├─ Ok(None)       ─► skip
//!         └─ Err(e)         ─► BusError::Handler(e), rest never run
//! ```
//!
//! ## Features
//! | Area              | Description                                                          | Key types / traits                 |
//! |-------------------|----------------------------------------------------------------------|------------------------------------|
//! | **Handler API**   | Register handlers, closures, exactly-once wrappers.                  | [`Handle`], [`handler_fn`], [`wait_fn`] |
//! | **Dispatch**      | Synchronous fan-out with cancellation; sequential async with results.| [`EventBus`], [`WaitOutcome`]      |
//! | **Unregistration**| Capability handles removing exactly one registration.                | [`StopHandle`]                     |
//! | **Reactions**     | Named fan-out strategies over listener snapshots.                    | [`React`], [`Parallel`], [`Series`]|
//! | **Errors**        | Typed errors for the bus and for handler failures.                   | [`BusError`], [`HandlerError`]     |
//! | **Configuration** | Type resolution override and registry sizing.                        | [`BusConfig`], [`BusBuilder`]      |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogHandler`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use evbus::{Event, EventBus, WaitOutcome};
//! use serde_json::json;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bus = EventBus::default();
//!
//!     // Synchronous delivery, registration order.
//!     let stop = bus.on_fn("greeting", |event, _cb| {
//!         println!("hello, {:?}", event.get("who"));
//!     });
//!     bus.emit(&Event::new("greeting").with_field("who", "world"))?;
//!     stop.stop();
//!
//!     // Sequential delivery with accumulated results.
//!     let _s1 = bus.on_wait_fn("sum", |_ev| Ok(Some(json!(1))));
//!     let _s2 = bus.on_wait_fn("sum", |_ev| Ok(Some(json!(2))));
//!     match bus.emit_wait(&Event::new("sum")).await? {
//!         WaitOutcome::Completed(results) => assert_eq!(results, vec![json!(1), json!(2)]),
//!         WaitOutcome::Unhandled(_) => unreachable!("listeners are registered"),
//!     }
//!     Ok(())
//! }
//! ```

mod bus;
mod config;
mod error;
mod events;
mod handlers;
mod reactions;

// ---- Public re-exports ----

pub use bus::{BusBuilder, EventBus, StopHandle, WaitOutcome};
pub use config::BusConfig;
pub use error::{BusError, HandlerError};
pub use events::{resolve_default, Event, EventType, ResolveFn};
pub use handlers::{handler_fn, wait_fn, Callback, Handle, HandlerRef};
pub use reactions::{Parallel, React, Series};

// Optional: expose a simple built-in logging handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::LogHandler;
