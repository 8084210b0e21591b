//! # Simple logging handler for debugging and demos.
//!
//! [`LogHandler`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [event] type=TaskFailed payload={"attempt":1,"type":"TaskFailed"}
//! [event] type=? payload=[1,2,3]
//! ```
//!
//! ## Example
//! ```no_run
//! # use evbus::{EventBus, LogHandler};
//! # use std::sync::Arc;
//! let bus = EventBus::default();
//! let _stop = bus.on("TaskFailed", Arc::new(LogHandler));
//! // LogHandler will print every delivered TaskFailed event
//! ```

use async_trait::async_trait;

use crate::events::Event;
use crate::handlers::{Callback, Handle};

/// Simple stdout logging handler.
///
/// Enabled via the `logging` feature. Prints one line per delivered event
/// for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Handle`] for
/// structured logging or metrics collection.
pub struct LogHandler;

#[async_trait]
impl Handle for LogHandler {
    fn on_event(&self, event: &Event, _callback: Option<&Callback>) {
        match event.type_tag() {
            Some(tag) => println!("[event] type={tag} payload={}", event.payload()),
            None => println!("[event] type=? payload={}", event.payload()),
        }
    }

    fn name(&self) -> &'static str {
        "log_handler"
    }
}
