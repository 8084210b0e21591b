//! # Events dispatched through the bus.
//!
//! An [`Event`] is an opaque payload: the bus never mutates it and never
//! inspects it beyond type resolution. The payload is a [`serde_json::Value`],
//! which keeps the bus agnostic of caller types while still letting the
//! default resolver read a `"type"` tag off it.
//!
//! ## Identity
//! Cancellation is scoped by *reference identity*: `cancel(event)` only stops
//! the propagation whose `emit` was called with that same `&Event`. A clone,
//! or a separately built event of the same type, is a different event as far
//! as cancellation is concerned.
//!
//! ## Example
//! ```rust
//! use evbus::Event;
//!
//! let ev = Event::new("TaskFailed")
//!     .with_field("task", "worker-1")
//!     .with_field("attempt", 3);
//!
//! assert_eq!(ev.type_tag(), Some("TaskFailed"));
//! assert_eq!(ev.get("attempt"), Some(&serde_json::json!(3)));
//! ```

use serde_json::Value;

/// Key derived from an event, used to select listeners.
///
/// Opaque and comparable; the bus only ever hashes and compares it.
pub type EventType = String;

/// Opaque payload dispatched through the bus.
///
/// The bus passes events through unmodified. The only field it may read is
/// the `"type"` tag, and only inside the default resolver.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    payload: Value,
}

impl Event {
    /// Creates an object event carrying the given `"type"` tag.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            payload: serde_json::json!({ "type": event_type.into() }),
        }
    }

    /// Wraps an arbitrary payload without touching it.
    ///
    /// The payload may be any JSON value, including ones the default
    /// resolver maps to a container tag or primitive name. `Value::Null` is
    /// accepted here but rejected at dispatch time by the default resolver.
    pub fn from_value(payload: Value) -> Self {
        Self { payload }
    }

    /// Attaches a field to an object payload (builder style).
    ///
    /// No-op when the payload is not a JSON object.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Value::Object(map) = &mut self.payload {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// The `"type"` tag, when the payload is an object carrying one.
    #[inline]
    pub fn type_tag(&self) -> Option<&str> {
        self.payload.get("type").and_then(Value::as_str)
    }

    /// Reads a field off an object payload.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Borrows the raw payload.
    #[inline]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consumes the event, returning the payload.
    #[inline]
    pub fn into_payload(self) -> Value {
        self.payload
    }
}

impl From<Value> for Event {
    fn from(payload: Value) -> Self {
        Self::from_value(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_sets_type_tag() {
        let ev = Event::new("FOO");
        assert_eq!(ev.type_tag(), Some("FOO"));
    }

    #[test]
    fn test_with_field_extends_object() {
        let ev = Event::new("FOO").with_field("data", 5).with_field("source", "nowhere");
        assert_eq!(ev.get("data"), Some(&json!(5)));
        assert_eq!(ev.get("source"), Some(&json!("nowhere")));
        assert_eq!(ev.type_tag(), Some("FOO"));
    }

    #[test]
    fn test_with_field_ignores_non_object() {
        let ev = Event::from_value(json!(42)).with_field("x", 1);
        assert_eq!(ev.payload(), &json!(42));
    }

    #[test]
    fn test_type_tag_absent_on_untagged_payloads() {
        assert_eq!(Event::from_value(json!({"data": 1})).type_tag(), None);
        assert_eq!(Event::from_value(json!("hello")).type_tag(), None);
    }
}
