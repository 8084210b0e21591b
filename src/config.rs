//! # Bus configuration.
//!
//! Provides [`BusConfig`], the constructor-time settings for an
//! [`EventBus`](crate::EventBus).
//!
//! Config is used in two ways:
//! 1. **Direct construction**: `EventBus::new(config)`
//! 2. **Builder seed**: `EventBus::builder().with_resolver(..).build()`
//!
//! ## Sentinel values
//! - `capacity = 0` → library default (no pre-allocation hint)

use crate::events::ResolveFn;

/// Constructor-time options for the event bus.
///
/// Defines:
/// - **Type resolution**: optional override for deriving an event's type key
/// - **Registry sizing**: initial capacity hint for the listener map
///
/// ## Field semantics
/// - `resolver`: `None` → built-in resolver (`"type"` field, then container
///   tag, then primitive name); `Some(f)` → `f` decides,
///   including whether null payloads are tolerated
/// - `capacity`: listener-map pre-allocation (`0` = no hint)
///
/// ## Notes
/// All fields are public for flexibility. Prefer the accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Default)]
pub struct BusConfig {
    /// Custom event-type resolver.
    ///
    /// When set, replaces the default resolution chain entirely. The
    /// function is consulted by every resolving operation (`emit`,
    /// `emit_wait`, `listeners`, reactions).
    pub resolver: Option<ResolveFn>,

    /// Initial capacity hint for the listener registry map.
    ///
    /// - `0` = no hint (map grows on demand)
    /// - `n > 0` = pre-allocate space for `n` event types
    pub capacity: usize,
}

impl BusConfig {
    /// Returns the registry capacity hint as an `Option`.
    ///
    /// - `None` → no hint
    /// - `Some(n)` → pre-allocate for `n` event types
    #[inline]
    pub fn capacity_hint(&self) -> Option<usize> {
        if self.capacity == 0 {
            None
        } else {
            Some(self.capacity)
        }
    }
}

impl std::fmt::Debug for BusConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusConfig")
            .field("resolver", &self.resolver.as_ref().map(|_| "custom"))
            .field("capacity", &self.capacity)
            .finish()
    }
}
