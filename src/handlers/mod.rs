//! # Event handlers for the bus.
//!
//! This module provides the [`Handle`] trait, closure adapters, and the
//! exactly-once wrapper used by [`EventBus::once`](crate::EventBus::once).
//!
//! ## Architecture
//! ```text
//! Dispatch flow:
//!   EventBus::emit ──────► snapshot ──► Handle::on_event(&Event, callback)
//!   EventBus::emit_wait ─► snapshot ──► Handle::on_event_wait(&Event).await
//!                                            │
//!                                       ┌────┴─────┬──────────┬────────┐
//!                                       ▼          ▼          ▼        ▼
//!                                   FnHandler  WaitFnHandler  Once  custom
//! ```
//!
//! ## Handler types
//! - **Plain handlers** — implement [`Handle`] directly, or wrap a closure
//!   with [`handler_fn`] / [`wait_fn`].
//! - **Once wrapper** — created internally by `once`; removes its own
//!   registration *before* invoking the wrapped handler so re-entrant
//!   emission cannot double-deliver.
//!
//! ## Implementing custom handlers
//! ```rust
//! use evbus::{Callback, Event, Handle, HandlerError};
//! use async_trait::async_trait;
//! use serde_json::Value;
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Handle for Audit {
//!     fn on_event(&self, event: &Event, _callback: Option<&Callback>) {
//!         // write audit record...
//!         let _ = event;
//!     }
//!
//!     async fn on_event_wait(&self, event: &Event) -> Result<Option<Value>, HandlerError> {
//!         // async I/O allowed here; completing the future is the continuation
//!         let _ = event;
//!         Ok(None)
//!     }
//! }
//! ```

mod adapters;
mod handler;
mod once;

#[cfg(feature = "logging")]
mod log;

pub use adapters::{handler_fn, wait_fn};
pub use handler::{Callback, Handle, HandlerRef};
pub(crate) use once::OnceHandler;

#[cfg(feature = "logging")]
pub use log::LogHandler;
