//! Event data model and type resolution.
//!
//! This module groups the event **payload wrapper** and the **resolver** that
//! derives an event-type key from a payload.
//!
//! ## Contents
//! - [`Event`], [`EventType`] — opaque payload and the key derived from it
//! - [`ResolveFn`], [`resolve_default`] — pluggable type resolution
//!
//! ## Quick reference
//! - **Producers**: callers construct events (`Event::new("FOO")` or
//!   `Event::from_value(..)`) and hand them to `emit`/`emit_wait`.
//! - **Consumers**: the bus resolves the type to select listeners, then
//!   passes the event through unmodified.

mod event;
mod resolver;

pub use event::{Event, EventType};
pub use resolver::{resolve_default, ResolveFn};
