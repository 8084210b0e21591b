//! # Bus facade - registration and dispatch entry points.
//!
//! [`EventBus`] ties the pieces together:
//! - Registration (`on`, `once`, `off`) populates the listener registry
//! - `emit` / `emit_with` drive the synchronous dispatcher with cooperative
//!   cancellation (`cancel`)
//! - `emit_wait` drives the sequential dispatcher with short-circuit error
//!   propagation
//! - `react` delegates the listener snapshot to a named fan-out strategy
//!
//! ## Architecture
//! ```text
//! on/once ──► Registry (type → ordered handler list)
//!                 │ snapshot at dispatch start
//!                 ▼
//! emit ─────► sync loop ──► Handle::on_event      ◄── cancel(event) stops
//!                 │                                   the next invocation
//! emit_wait ► sequential loop ──► Handle::on_event_wait (one in flight)
//!                 │
//! react ────► ReactionSet[name].run(snapshot, event)
//! ```
//!
//! ## Rules
//! - No lock is held while a handler runs; handlers may call `on`, `off`,
//!   `emit` and `cancel` re-entrantly.
//! - Registration and removal during a live dispatch never affect the
//!   snapshot already being iterated; they take effect for subsequent emits.
//! - Handler panics on the sync path are not caught; they propagate to the
//!   caller of `emit` and the registry stays usable.

use std::sync::Arc;

use crate::bus::registry::Registry;
use crate::bus::scope::EmitStack;
use crate::bus::wait::{dispatch_sequential, WaitOutcome};
use crate::bus::{BusBuilder, StopHandle};
use crate::config::BusConfig;
use crate::error::BusError;
use crate::events::{resolve_default, Event, EventType, ResolveFn};
use crate::handlers::{handler_fn, wait_fn, Callback, HandlerRef, OnceHandler};
use crate::reactions::ReactionSet;

/// In-process publish/subscribe event bus.
///
/// Register handlers against an event-type key, then dispatch events to all
/// matching handlers. The bus is `Send + Sync`; share it behind an `Arc`
/// when handlers need to call back into it.
///
/// ## Example
/// ```rust
/// use evbus::{Event, EventBus};
///
/// let bus = EventBus::default();
/// let stop = bus.on_fn("greeting", |event, _cb| {
///     println!("got {:?}", event.get("who"));
/// });
///
/// bus.emit(&Event::new("greeting").with_field("who", "world")).unwrap();
/// stop.stop();
/// ```
pub struct EventBus {
    registry: Arc<Registry>,
    resolver: Option<ResolveFn>,
    emits: EmitStack,
    reactions: ReactionSet,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").finish_non_exhaustive()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(BusConfig::default())
    }
}

impl EventBus {
    /// Creates a bus from the given configuration, with no reactions.
    pub fn new(config: BusConfig) -> Self {
        Self::with_reactions(config, ReactionSet::new())
    }

    /// Starts a builder for a bus with reactions and a custom resolver.
    pub fn builder() -> BusBuilder {
        BusBuilder::new(BusConfig::default())
    }

    pub(crate) fn with_reactions(config: BusConfig, reactions: ReactionSet) -> Self {
        Self {
            registry: Registry::new(config.capacity_hint()),
            resolver: config.resolver,
            emits: EmitStack::new(),
            reactions,
        }
    }

    /// Resolves an event's type key via the configured or default resolver.
    fn resolve(&self, event: &Event) -> Result<EventType, BusError> {
        match &self.resolver {
            Some(resolver) => resolver(event),
            None => resolve_default(event),
        }
    }

    // ---------------------------
    // Registration
    // ---------------------------

    /// Registers a handler for an event type.
    ///
    /// The handler is appended to the (lazily created) list for the type;
    /// listeners run in registration order. Registering the same handler
    /// value twice creates two independent registrations.
    ///
    /// Returns the [`StopHandle`] that removes exactly this registration.
    pub fn on(&self, event_type: impl Into<EventType>, handler: HandlerRef) -> StopHandle {
        self.registry.insert(&event_type.into(), handler)
    }

    /// Registers a synchronous closure. See [`EventBus::on`].
    pub fn on_fn<F>(&self, event_type: impl Into<EventType>, f: F) -> StopHandle
    where
        F: Fn(&Event, Option<&Callback>) + Send + Sync + 'static,
    {
        self.on(event_type, handler_fn(f))
    }

    /// Registers a handler delivered at most once.
    ///
    /// The wrapper removes its own registration *before* invoking the
    /// wrapped handler, so re-entrant emission of the same type cannot
    /// deliver it twice. The returned handle cancels the registration
    /// before first delivery.
    pub fn once(&self, event_type: impl Into<EventType>, handler: HandlerRef) -> StopHandle {
        let wrapper = Arc::new(OnceHandler::new(handler));
        let stop = self.on(event_type, Arc::clone(&wrapper) as HandlerRef);
        wrapper.bind(stop.clone());
        stop
    }

    /// Registers a synchronous closure delivered at most once. See [`EventBus::once`].
    pub fn once_fn<F>(&self, event_type: impl Into<EventType>, f: F) -> StopHandle
    where
        F: Fn(&Event, Option<&Callback>) + Send + Sync + 'static,
    {
        self.once(event_type, handler_fn(f))
    }

    /// Registers a completion closure for sequential dispatch. See [`wait_fn`].
    pub fn on_wait_fn<F>(&self, event_type: impl Into<EventType>, f: F) -> StopHandle
    where
        F: Fn(&Event) -> Result<Option<serde_json::Value>, crate::HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.on(event_type, wait_fn(f))
    }

    /// Removes every handler registered for an event type.
    ///
    /// No error when the type was never registered. Stop handles issued for
    /// the removed registrations become inert, even if the type is
    /// registered again afterwards.
    pub fn off(&self, event_type: &str) {
        self.registry.remove_type(event_type);
    }

    /// Snapshot of the handlers currently registered for the event's type.
    ///
    /// Resolves the event first, so a null event fails with
    /// [`BusError::InvalidEvent`]. The returned vector is a copy; mutating
    /// it does not touch the registry. Empty (never an error) when nothing
    /// is registered.
    pub fn listeners(&self, event: &Event) -> Result<Vec<HandlerRef>, BusError> {
        let event_type = self.resolve(event)?;
        Ok(self.registry.snapshot(&event_type))
    }

    // ---------------------------
    // Synchronous dispatch
    // ---------------------------

    /// Emits an event to every registered listener, in registration order.
    ///
    /// Shorthand for [`EventBus::emit_with`] without a callback value.
    pub fn emit(&self, event: &Event) -> Result<(), BusError> {
        self.emit_with(event, None)
    }

    /// Emits an event, forwarding an opaque callback value to each handler.
    ///
    /// The listener list is snapshotted at call time: registrations and
    /// removals made by handlers apply to subsequent emits only. The
    /// propagate flag is re-checked after every handler, so a handler
    /// calling [`EventBus::cancel`] with this event stops the listeners
    /// after it from running.
    ///
    /// With no listeners registered this is a no-op and the callback value
    /// is never examined. Handler panics are not caught.
    ///
    /// # Errors
    /// [`BusError::InvalidEvent`] when type resolution rejects the event.
    pub fn emit_with(&self, event: &Event, callback: Option<&Callback>) -> Result<(), BusError> {
        let event_type = self.resolve(event)?;
        let snapshot = self.registry.snapshot(&event_type);
        if snapshot.is_empty() {
            return Ok(());
        }

        let frame = self.emits.enter(event);
        for handler in &snapshot {
            if !frame.propagating() {
                break;
            }
            handler.on_event(event, callback);
        }
        Ok(())
    }

    /// Stops the in-flight propagation of exactly this event.
    ///
    /// Scoped by reference identity: only an emit called with this same
    /// `&Event` is affected, so stale or nested-event cancellation cannot
    /// bleed into the wrong emit. The handler that called `cancel` finishes
    /// normally; the listeners after it are not invoked. Safe no-op when
    /// the event is not currently propagating.
    pub fn cancel(&self, event: &Event) {
        self.emits.cancel_for(event);
    }

    // ---------------------------
    // Sequential dispatch
    // ---------------------------

    /// Emits an event to every listener, one at a time, collecting results.
    ///
    /// Handler N+1 never starts before handler N's future resolves. The
    /// first handler error short-circuits the chain and is returned as
    /// [`BusError::Handler`]; remaining handlers are never invoked.
    ///
    /// With no listeners registered, completes immediately with
    /// [`WaitOutcome::Unhandled`] carrying the original event — the
    /// documented "nothing happened" sentinel, intentionally distinct from
    /// an empty result set.
    ///
    /// There is no cancellation primitive for this path; a handler that
    /// never resolves stalls only this call.
    pub async fn emit_wait(&self, event: &Event) -> Result<WaitOutcome, BusError> {
        let event_type = self.resolve(event)?;
        let snapshot = self.registry.snapshot(&event_type);
        if snapshot.is_empty() {
            return Ok(WaitOutcome::Unhandled(event.clone()));
        }

        let results = dispatch_sequential(&snapshot, event).await?;
        Ok(WaitOutcome::Completed(results))
    }

    // ---------------------------
    // Reactions
    // ---------------------------

    /// Runs the named fan-out strategy over the current listener snapshot.
    ///
    /// The bus resolves the event, snapshots the listener list and hands
    /// both to the reaction unmodified — including the empty-snapshot case,
    /// which reactions answer with [`WaitOutcome::Unhandled`].
    ///
    /// # Errors
    /// [`BusError::UnknownReaction`] when nothing is registered under
    /// `name`; resolution and handler errors pass through.
    pub async fn react(&self, name: &str, event: &Event) -> Result<WaitOutcome, BusError> {
        let listeners = self.listeners(event)?;
        let reaction = self
            .reactions
            .get(name)
            .ok_or_else(|| BusError::UnknownReaction {
                name: name.to_string(),
            })?;
        reaction.run(listeners, event).await
    }

    /// Names of the registered fan-out strategies.
    pub fn reaction_names(&self) -> Vec<&'static str> {
        self.reactions.names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandlerError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn counting_handler(hits: &Arc<AtomicUsize>) -> HandlerRef {
        let hits = Arc::clone(hits);
        handler_fn(move |_ev, _cb| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn recording_handler(log: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> HandlerRef {
        let log = Arc::clone(log);
        handler_fn(move |_ev, _cb| {
            log.lock().unwrap().push(tag);
        })
    }

    // Register on "FOO"; emit twice; handler invoked twice.
    #[test]
    fn test_emit_delivers_to_registered_handler() {
        let bus = EventBus::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let _stop = bus.on("FOO", counting_handler(&hits));

        let event = Event::new("FOO").with_field("data", 5);
        bus.emit(&event).unwrap();
        bus.emit(&event).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    // off with nothing registered; listeners stays empty.
    #[test]
    fn test_off_on_unregistered_type_is_safe() {
        let bus = EventBus::default();
        bus.off("FOO");
        assert!(bus.listeners(&Event::new("FOO")).unwrap().is_empty());
    }

    // Stop twice; listeners excludes the handler; the second stop is inert.
    #[test]
    fn test_stop_handle_removes_exactly_once() {
        let bus = EventBus::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let stop = bus.on("FOO", counting_handler(&hits));

        stop.stop();
        stop.stop();
        assert!(bus.listeners(&Event::new("FOO")).unwrap().is_empty());

        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    // Registration order is invocation order on the sync path.
    #[test]
    fn test_emit_preserves_registration_order() {
        let bus = EventBus::default();
        let log = Arc::new(Mutex::new(Vec::new()));
        let _s1 = bus.on("FOO", recording_handler(&log, "h1"));
        let _s2 = bus.on("FOO", recording_handler(&log, "h2"));

        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["h1", "h2"]);
    }

    // ...and on the sequential path.
    #[tokio::test]
    async fn test_emit_wait_preserves_registration_order() {
        let bus = EventBus::default();
        let log = Arc::new(Mutex::new(Vec::new()));
        for tag in ["h1", "h2", "h3"] {
            let log = Arc::clone(&log);
            let _stop = bus.on_wait_fn("FOO", move |_ev| {
                log.lock().unwrap().push(tag);
                Ok(Some(json!(tag)))
            });
        }

        let out = bus.emit_wait(&Event::new("FOO")).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["h1", "h2", "h3"]);
        assert_eq!(
            out.results().unwrap(),
            &[json!("h1"), json!("h2"), json!("h3")]
        );
    }

    // once delivers exactly once across two emits.
    #[test]
    fn test_once_delivers_exactly_once() {
        let bus = EventBus::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let _stop = bus.once("FOO", counting_handler(&hits));

        bus.emit(&Event::new("FOO")).unwrap();
        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(bus.listeners(&Event::new("FOO")).unwrap().is_empty());
    }

    #[test]
    fn test_once_stop_before_first_delivery() {
        let bus = EventBus::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let stop = bus.once("FOO", counting_handler(&hits));

        stop.stop();
        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    // Re-entrant same-type emission must not double-deliver a once handler.
    #[test]
    fn test_once_survives_reentrant_emit() {
        let bus = Arc::new(EventBus::default());
        let hits = Arc::new(AtomicUsize::new(0));

        let seen = Arc::clone(&hits);
        let inner_bus = Arc::clone(&bus);
        let _stop = bus.once_fn("FOO", move |_ev, _cb| {
            seen.fetch_add(1, Ordering::SeqCst);
            // Same type again, from inside the first delivery.
            inner_bus.emit(&Event::new("FOO")).unwrap();
        });

        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    // Operations on an unregistered type never fail.
    #[tokio::test]
    async fn test_unregistered_type_operations_are_safe() {
        let bus = EventBus::default();
        let event = Event::new("NEVER");

        bus.emit(&event).unwrap();
        bus.cancel(&event);
        bus.off("NEVER");
        assert!(bus.listeners(&event).unwrap().is_empty());

        let out = bus.emit_wait(&event).await.unwrap();
        match out {
            WaitOutcome::Unhandled(returned) => assert_eq!(returned, event),
            WaitOutcome::Completed(_) => panic!("expected the unhandled sentinel"),
        }
    }

    // Emit without listeners never examines the callback value.
    #[test]
    fn test_emit_without_listeners_is_noop() {
        let bus = EventBus::default();
        let callback = 42u32;
        bus.emit_with(&Event::new("NEVER"), Some(&callback)).unwrap();
    }

    // Cancellation stops later listeners, scoped to the exact event object.
    #[test]
    fn test_cancel_scopes_to_propagating_event() {
        let bus = Arc::new(EventBus::default());
        let canceller_bus = Arc::clone(&bus);
        let _s1 = bus.on_fn("FOO", move |event, _cb| {
            canceller_bus.cancel(event);
        });

        let hits = Arc::new(AtomicUsize::new(0));
        let _s2 = bus.on("FOO", counting_handler(&hits));

        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0, "listener after cancel ran");

        // A different event object of the same type propagates fully.
        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_of_foreign_event_does_not_bleed() {
        let bus = Arc::new(EventBus::default());
        let unrelated = Event::new("FOO");

        let canceller_bus = Arc::clone(&bus);
        let foreign = unrelated.clone();
        let _s1 = bus.on_fn("FOO", move |_event, _cb| {
            // Cancels an event that is not the one propagating.
            canceller_bus.cancel(&foreign);
        });

        let hits = Arc::new(AtomicUsize::new(0));
        let _s2 = bus.on("FOO", counting_handler(&hits));

        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    // Error short-circuit through the facade.
    #[tokio::test]
    async fn test_emit_wait_short_circuits_on_error() {
        let bus = EventBus::default();
        let _s1 = bus.on_wait_fn("FOO", |_ev| Ok(Some(json!(1))));
        let _s2 = bus.on_wait_fn("FOO", |_ev| Err(HandlerError::new("broken")));

        let third = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&third);
        let _s3 = bus.on_wait_fn("FOO", move |_ev| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(Some(json!(3)))
        });

        let err = bus.emit_wait(&Event::new("FOO")).await.unwrap_err();
        assert!(err.is_handler_error());
        assert_eq!(err.as_message(), "handler failed: broken");
        assert_eq!(third.load(Ordering::SeqCst), 0);
    }

    // Accumulation in invocation order.
    #[tokio::test]
    async fn test_emit_wait_accumulates_results() {
        let bus = EventBus::default();
        for n in 1..=3i64 {
            let _stop = bus.on_wait_fn("FOO", move |_ev| Ok(Some(json!(n))));
        }

        let out = bus.emit_wait(&Event::new("FOO")).await.unwrap();
        assert_eq!(out.into_results(), vec![json!(1), json!(2), json!(3)]);
    }

    // Registration during a live emit is invisible to that emit.
    #[test]
    fn test_snapshot_isolated_from_reentrant_registration() {
        let bus = Arc::new(EventBus::default());
        let late_hits = Arc::new(AtomicUsize::new(0));

        let registrar_bus = Arc::clone(&bus);
        let late = Arc::clone(&late_hits);
        let _s1 = bus.on_fn("FOO", move |_ev, _cb| {
            let late = Arc::clone(&late);
            let _ = registrar_bus.on_fn("FOO", move |_ev, _cb| {
                late.fetch_add(1, Ordering::SeqCst);
            });
        });

        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(
            late_hits.load(Ordering::SeqCst),
            0,
            "handler registered mid-emit must not run in that emit"
        );

        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(late_hits.load(Ordering::SeqCst), 1);
    }

    // Removal during a live emit does not skip or duplicate entries: a
    // handler stopping another mid-iteration leaves the snapshot already
    // being delivered intact.
    #[test]
    fn test_snapshot_isolated_from_reentrant_removal() {
        let bus = Arc::new(EventBus::default());

        let victim_hits = Arc::new(AtomicUsize::new(0));
        let remover_hits = Arc::new(AtomicUsize::new(0));

        let victim_stop = bus.on("FOO", counting_handler(&victim_hits));
        let remover_seen = Arc::clone(&remover_hits);
        let victim_stop = Mutex::new(Some(victim_stop));
        let _remover = bus.on_fn("FOO", move |_ev, _cb| {
            remover_seen.fetch_add(1, Ordering::SeqCst);
            if let Some(stop) = victim_stop.lock().unwrap().take() {
                stop.stop();
            }
        });

        // The victim is first in the snapshot, so it runs this emit; the
        // remover stops it afterwards without perturbing the iteration.
        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(victim_hits.load(Ordering::SeqCst), 1);
        assert_eq!(remover_hits.load(Ordering::SeqCst), 1);

        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(
            victim_hits.load(Ordering::SeqCst),
            1,
            "stopped handler ran again"
        );
        assert_eq!(remover_hits.load(Ordering::SeqCst), 2);
    }

    // A panicking handler unwinds to the caller of emit; the drop guard
    // pops the propagation frame and the registry stays usable.
    #[test]
    fn test_panicking_handler_unwinds_and_bus_stays_usable() {
        let bus = EventBus::default();
        let boom = bus.on_fn("FOO", |_ev, _cb| panic!("handler exploded"));

        let hits = Arc::new(AtomicUsize::new(0));
        let _after = bus.on("FOO", counting_handler(&hits));

        let event = Event::new("FOO");
        let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = bus.emit(&event);
        }));
        assert!(unwound.is_err(), "the panic must reach the caller of emit");
        assert_eq!(
            hits.load(Ordering::SeqCst),
            0,
            "listener after the panicking one ran"
        );

        // Frame popped, locks released: the same event object dispatches
        // cleanly once the panicking handler is gone.
        boom.stop();
        bus.emit(&event).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_value_passes_through_verbatim() {
        let bus = EventBus::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&seen);
        let _stop = bus.on_fn("FOO", move |_ev, cb| {
            let value = cb
                .and_then(|any| any.downcast_ref::<u32>())
                .copied()
                .expect("callback must arrive untouched");
            sink.store(value as usize, Ordering::SeqCst);
        });

        let callback = 42u32;
        bus.emit_with(&Event::new("FOO"), Some(&callback)).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }

    #[tokio::test]
    async fn test_null_event_is_rejected_everywhere() {
        let bus = EventBus::default();
        let null_event = Event::from_value(json!(null));

        assert!(matches!(
            bus.emit(&null_event).unwrap_err(),
            BusError::InvalidEvent
        ));
        assert!(matches!(
            bus.emit_wait(&null_event).await.unwrap_err(),
            BusError::InvalidEvent
        ));
        assert!(matches!(
            bus.listeners(&null_event).unwrap_err(),
            BusError::InvalidEvent
        ));
    }

    #[test]
    fn test_custom_resolver_overrides_default() {
        let bus = EventBus::builder()
            .with_resolver(|event: &Event| {
                Ok(event
                    .get("channel")
                    .and_then(|v| v.as_str())
                    .unwrap_or("fallback")
                    .to_string())
            })
            .build()
            .unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        let _stop = bus.on("alerts", counting_handler(&hits));

        // "type" tag is ignored; the custom resolver reads "channel".
        let event = Event::new("FOO").with_field("channel", "alerts");
        bus.emit(&event).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // Custom resolver tolerates null payloads.
        let null_event = Event::from_value(json!(null));
        bus.emit(&null_event).unwrap();
    }

    #[test]
    fn test_duplicate_registration_requires_two_stops() {
        let bus = EventBus::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = counting_handler(&hits);
        let stop_a = bus.on("FOO", Arc::clone(&handler));
        let stop_b = bus.on("FOO", handler);

        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        stop_a.stop();
        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 3);

        stop_b.stop();
        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_stale_stop_handle_after_off_and_reregistration() {
        let bus = EventBus::default();
        let stale = bus.on("FOO", handler_fn(|_ev, _cb| {}));

        bus.off("FOO");
        let hits = Arc::new(AtomicUsize::new(0));
        let _fresh = bus.on("FOO", counting_handler(&hits));

        stale.stop();
        bus.emit(&Event::new("FOO")).unwrap();
        assert_eq!(
            hits.load(Ordering::SeqCst),
            1,
            "stale handle removed the fresh registration"
        );
    }

    #[tokio::test]
    async fn test_unknown_reaction_errors() {
        let bus = EventBus::default();
        let err = bus.react("parallel", &Event::new("FOO")).await.unwrap_err();
        assert!(matches!(err, BusError::UnknownReaction { .. }));
    }
}
