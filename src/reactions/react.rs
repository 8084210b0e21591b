//! # Reaction trait and the statically declared table.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::bus::WaitOutcome;
use crate::error::BusError;
use crate::events::Event;
use crate::handlers::HandlerRef;

/// Names a reaction may not take: the bus's own dispatch methods.
const PROTECTED_NAMES: &[&str] = &[
    "emit",
    "emit_wait",
    "on",
    "once",
    "off",
    "listeners",
    "cancel",
];

/// Contract for fan-out strategies.
///
/// A reaction receives the listener snapshot the bus resolved for the
/// event plus the event itself, and returns what the bus hands back to the
/// caller. The snapshot arrives unmodified; in particular, the empty case
/// is the reaction's to answer (with [`WaitOutcome::Unhandled`]).
#[async_trait]
pub trait React: Send + Sync + 'static {
    /// Stable name the strategy is dispatched under.
    fn name(&self) -> &'static str;

    /// Runs the fan-out over the snapshot.
    async fn run(
        &self,
        listeners: Vec<HandlerRef>,
        event: &Event,
    ) -> Result<WaitOutcome, BusError>;
}

/// Immutable name → strategy table, validated at registration.
pub(crate) struct ReactionSet {
    table: HashMap<&'static str, Arc<dyn React>>,
}

impl ReactionSet {
    pub(crate) fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Adds a strategy, rejecting protected and duplicate names.
    pub(crate) fn register(&mut self, reaction: Arc<dyn React>) -> Result<(), BusError> {
        let name = reaction.name();
        if PROTECTED_NAMES.contains(&name) {
            return Err(BusError::ReservedName {
                name: name.to_string(),
            });
        }
        if self.table.contains_key(name) {
            return Err(BusError::DuplicateReaction {
                name: name.to_string(),
            });
        }
        self.table.insert(name, reaction);
        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Arc<dyn React>> {
        self.table.get(name)
    }

    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.table.keys().copied().collect()
    }
}
