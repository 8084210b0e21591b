//! # Event-type resolution.
//!
//! Derives the [`EventType`] key the bus uses to select listeners. The
//! default chain, in priority order:
//!
//! 1. the payload's `"type"` field, when it is a non-empty string;
//! 2. the container tag (`"Object"` / `"Array"`);
//! 3. the primitive type name (`"string"` / `"number"` / `"boolean"`).
//!
//! Every non-null payload falls into one of those buckets: `Value` is a
//! closed set, so no catch-all "unknown type" sentinel can ever fire here.
//! A `Value::Null` payload fails with [`BusError::InvalidEvent`] — resolution
//! of a null event is an error, not a fallback.
//!
//! Resolution is pluggable: a [`ResolveFn`] set on
//! [`BusConfig`](crate::BusConfig) replaces the whole chain, including the
//! null check.

use std::sync::Arc;

use crate::error::BusError;
use crate::events::{Event, EventType};
use serde_json::Value;

/// Pluggable resolver: derives an event-type key from an event.
///
/// A plain function value, not a trait — there is exactly one seam and one
/// signature. Set it via [`BusConfig::resolver`](crate::BusConfig::resolver).
pub type ResolveFn = Arc<dyn Fn(&Event) -> Result<EventType, BusError> + Send + Sync>;

/// Resolves an event's type with the built-in fallback chain.
///
/// # Errors
/// Returns [`BusError::InvalidEvent`] for `Value::Null` payloads.
///
/// # Example
/// ```
/// use evbus::{resolve_default, Event};
/// use serde_json::json;
///
/// assert_eq!(resolve_default(&Event::new("FOO")).unwrap(), "FOO");
/// assert_eq!(resolve_default(&Event::from_value(json!({}))).unwrap(), "Object");
/// assert_eq!(resolve_default(&Event::from_value(json!(5))).unwrap(), "number");
/// assert!(resolve_default(&Event::from_value(json!(null))).is_err());
/// ```
pub fn resolve_default(event: &Event) -> Result<EventType, BusError> {
    if let Some(tag) = event.type_tag() {
        if !tag.is_empty() {
            return Ok(tag.to_string());
        }
    }

    let ty = match event.payload() {
        Value::Null => return Err(BusError::InvalidEvent),
        Value::Object(_) => "Object",
        Value::Array(_) => "Array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
    };
    Ok(ty.to_string())
}
