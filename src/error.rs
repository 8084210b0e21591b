//! Error types used by the event bus and its handlers.
//!
//! This module defines two main error types:
//!
//! - [`BusError`] — errors raised by the bus itself (type resolution,
//!   reaction-table violations) plus the wrapper for handler failures.
//! - [`HandlerError`] — the failure a handler reports through its completion
//!   channel on the sequential dispatch path.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics. No error is fatal to the bus: the registry stays usable
//! after any of them.

use thiserror::Error;

/// # Errors produced by the bus.
///
/// These represent failures in the dispatch machinery itself, such as
/// resolving the type of a null event, or registering a reaction under a
/// name the bus reserves for its own dispatch methods.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// The event's type could not be resolved because the payload is null.
    ///
    /// Raised by the default resolver only; a custom resolver may tolerate
    /// null payloads.
    #[error("event must be a defined, non-null value")]
    InvalidEvent,

    /// A reaction was registered under a name the bus protects.
    ///
    /// Protected names are the bus's own dispatch methods (`emit`,
    /// `emit_wait`, `on`, `once`, `off`, `listeners`, `cancel`); a reaction
    /// must not shadow them.
    #[error("reaction name {name:?} collides with a protected bus method")]
    ReservedName {
        /// The offending reaction name.
        name: String,
    },

    /// Two reactions were registered under the same name.
    #[error("reaction {name:?} is already registered")]
    DuplicateReaction {
        /// The duplicated reaction name.
        name: String,
    },

    /// A dispatch was requested for a reaction name nothing was registered under.
    #[error("no reaction registered under {name:?}")]
    UnknownReaction {
        /// The unknown reaction name.
        name: String,
    },

    /// A handler reported a failure on the sequential dispatch path.
    ///
    /// This is the bus's one first-class, recoverable error channel: the
    /// sequential dispatcher short-circuits cleanly and surfaces the failure
    /// to the caller of `emit_wait` (or of the reaction that observed it).
    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use evbus::BusError;
    ///
    /// assert_eq!(BusError::InvalidEvent.as_label(), "bus_invalid_event");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::InvalidEvent => "bus_invalid_event",
            BusError::ReservedName { .. } => "bus_reserved_name",
            BusError::DuplicateReaction { .. } => "bus_duplicate_reaction",
            BusError::UnknownReaction { .. } => "bus_unknown_reaction",
            BusError::Handler(_) => "bus_handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BusError::InvalidEvent => "event must be a defined, non-null value".to_string(),
            BusError::ReservedName { name } => format!("reserved name: {name}"),
            BusError::DuplicateReaction { name } => format!("duplicate reaction: {name}"),
            BusError::UnknownReaction { name } => format!("unknown reaction: {name}"),
            BusError::Handler(err) => format!("handler failed: {}", err.reason()),
        }
    }

    /// True if the error came out of a handler rather than the bus itself.
    ///
    /// Bus-side errors indicate a misuse (null event, bad reaction name);
    /// handler errors are ordinary short-circuits of a sequential dispatch.
    pub fn is_handler_error(&self) -> bool {
        matches!(self, BusError::Handler(_))
    }
}

/// # Failure reported by a handler on the sequential dispatch path.
///
/// On the sequential path a handler completes with either data or an error;
/// this type carries the error half. The dispatcher stops invoking the
/// remaining handlers and hands the failure to the caller as
/// [`BusError::Handler`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("handler failed: {reason}")]
pub struct HandlerError {
    reason: String,
}

impl HandlerError {
    /// Creates a handler error with the given reason.
    ///
    /// # Example
    /// ```
    /// use evbus::HandlerError;
    ///
    /// let err = HandlerError::new("connection refused");
    /// assert_eq!(err.reason(), "connection refused");
    /// ```
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The underlying failure reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<String> for HandlerError {
    fn from(reason: String) -> Self {
        Self { reason }
    }
}

impl From<&str> for HandlerError {
    fn from(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(BusError::InvalidEvent.as_label(), "bus_invalid_event");
        let err = BusError::ReservedName {
            name: "emit".into(),
        };
        assert_eq!(err.as_label(), "bus_reserved_name");
        let err = BusError::Handler(HandlerError::new("boom"));
        assert_eq!(err.as_label(), "bus_handler_failed");
    }

    #[test]
    fn test_handler_error_round_trips_reason() {
        let err: HandlerError = "boom".into();
        assert_eq!(err.reason(), "boom");
        assert_eq!(err.to_string(), "handler failed: boom");

        let wrapped: BusError = err.into();
        assert!(wrapped.is_handler_error());
        assert_eq!(wrapped.as_message(), "handler failed: boom");
    }
}
