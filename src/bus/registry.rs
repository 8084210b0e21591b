//! # Listener registry - event-type keyed handler lists.
//!
//! The registry maps each event type to an ordered list of handlers:
//! - Lists are created lazily on first registration for a type
//! - A type key exists if and only if its list is non-empty
//! - Removal that empties a list deletes the key
//!
//! ## Identity
//! Every list and every registration carries an id drawn from one per-bus
//! counter. Entry ids make duplicate registrations of the same handler value
//! independent (each [`StopHandle`] removes only its own entry). List ids
//! guard against the lost-update race where a stale stop handle fires after
//! `off` cleared the type and a fresh registration re-created the list: the
//! stale handle's recorded list id no longer matches, so it does nothing.
//!
//! ## Rules
//! - The lock is never held while a handler runs; dispatchers take a
//!   copy-out snapshot and release the lock before invoking anything
//! - All operations are idempotent-safe (stopping twice, `off` on an
//!   unknown type, snapshots of unregistered types)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::events::EventType;
use crate::handlers::HandlerRef;

/// One registration: a handler plus its registration id.
struct Entry {
    id: u64,
    handler: HandlerRef,
}

/// Ordered handler list for one event type.
struct ListenerList {
    /// Identity of this list instance; re-created lists get a fresh id.
    id: u64,
    entries: Vec<Entry>,
}

/// Event-type keyed registry of handler lists.
pub(crate) struct Registry {
    lists: Mutex<HashMap<EventType, ListenerList>>,
    next_id: AtomicU64,
}

impl Registry {
    /// Creates a new registry, optionally pre-allocating the type map.
    pub(crate) fn new(capacity: Option<usize>) -> Arc<Self> {
        let map = match capacity {
            Some(n) => HashMap::with_capacity(n),
            None => HashMap::new(),
        };
        Arc::new(Self {
            lists: Mutex::new(map),
            next_id: AtomicU64::new(1),
        })
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Appends a handler to the (lazily created) list for `event_type`.
    ///
    /// Returns the capability that removes exactly this registration.
    pub(crate) fn insert(self: &Arc<Self>, event_type: &str, handler: HandlerRef) -> StopHandle {
        let entry_id = self.next_id();
        let mut lists = self.lists.lock().expect("registry lock poisoned");

        let list = lists
            .entry(event_type.to_string())
            .or_insert_with(|| ListenerList {
                id: self.next_id(),
                entries: Vec::new(),
            });
        list.entries.push(Entry {
            id: entry_id,
            handler,
        });

        StopHandle {
            registry: Arc::downgrade(self),
            event_type: event_type.to_string(),
            list_id: list.id,
            entry_id,
        }
    }

    /// Copy-out snapshot of the handler list for `event_type`.
    ///
    /// Empty when the type is unregistered. Mutating the registry afterwards
    /// never affects a snapshot already taken.
    pub(crate) fn snapshot(&self, event_type: &str) -> Vec<HandlerRef> {
        let lists = self.lists.lock().expect("registry lock poisoned");
        lists
            .get(event_type)
            .map(|list| list.entries.iter().map(|e| Arc::clone(&e.handler)).collect())
            .unwrap_or_default()
    }

    /// Removes the entire list for `event_type`. No-op when absent.
    pub(crate) fn remove_type(&self, event_type: &str) {
        let mut lists = self.lists.lock().expect("registry lock poisoned");
        lists.remove(event_type);
    }

    /// Removes one registration; deletes the key if the list empties.
    ///
    /// The `list_id` check makes stale handles inert: a list re-created
    /// after `off` carries a different id and is left alone.
    fn remove_entry(&self, event_type: &str, list_id: u64, entry_id: u64) {
        let mut lists = self.lists.lock().expect("registry lock poisoned");
        let Some(list) = lists.get_mut(event_type) else {
            return;
        };
        if list.id != list_id {
            return;
        }
        if let Some(pos) = list.entries.iter().position(|e| e.id == entry_id) {
            list.entries.remove(pos);
        }
        if list.entries.is_empty() {
            lists.remove(event_type);
        }
    }

    /// Number of event types currently registered.
    #[cfg(test)]
    pub(crate) fn type_count(&self) -> usize {
        self.lists.lock().expect("registry lock poisoned").len()
    }
}

/// Capability to deregister one specific handler registration.
///
/// Returned by [`EventBus::on`](crate::EventBus::on) and
/// [`EventBus::once`](crate::EventBus::once). Calling [`StopHandle::stop`]
/// more than once is safe; after the first effective removal the handle is a
/// no-op. The handle holds a weak reference to the bus internals, so it may
/// outlive the bus.
#[derive(Clone)]
pub struct StopHandle {
    registry: Weak<Registry>,
    event_type: EventType,
    list_id: u64,
    entry_id: u64,
}

impl StopHandle {
    /// Removes this registration from the bus.
    ///
    /// Idempotent: a second call finds nothing to remove. Inert when the
    /// type was cleared via `off` and re-registered since (the recorded list
    /// identity no longer matches), and when the bus is gone.
    pub fn stop(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove_entry(&self.event_type, self.list_id, self.entry_id);
        }
    }

    /// The event type this handle was registered under.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }
}

impl std::fmt::Debug for StopHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopHandle")
            .field("event_type", &self.event_type)
            .field("entry_id", &self.entry_id)
            .finish()
    }
}
