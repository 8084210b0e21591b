//! Builder for constructing an [`EventBus`] with optional features.

use std::sync::Arc;

use crate::bus::EventBus;
use crate::config::BusConfig;
use crate::error::BusError;
use crate::events::{Event, EventType};
use crate::reactions::{Parallel, React, ReactionSet, Series};

/// Builder for an [`EventBus`].
///
/// Reactions form a statically declared table: they are registered here,
/// validated at [`BusBuilder::build`], and immutable afterwards — nothing
/// can shadow the bus's own dispatch methods at runtime.
pub struct BusBuilder {
    cfg: BusConfig,
    reactions: Vec<Arc<dyn React>>,
}

impl BusBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: BusConfig) -> Self {
        Self {
            cfg,
            reactions: Vec::new(),
        }
    }

    /// Sets a custom event-type resolver.
    ///
    /// Replaces the default resolution chain entirely, including the
    /// null-payload check.
    pub fn with_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Event) -> Result<EventType, BusError> + Send + Sync + 'static,
    {
        self.cfg.resolver = Some(Arc::new(resolver));
        self
    }

    /// Sets the initial capacity hint for the listener registry.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.cfg.capacity = capacity;
        self
    }

    /// Declares one fan-out strategy for the reaction table.
    ///
    /// Name validation happens at [`BusBuilder::build`].
    pub fn with_reaction(mut self, reaction: Arc<dyn React>) -> Self {
        self.reactions.push(reaction);
        self
    }

    /// Declares the built-in reference strategies ([`Parallel`], [`Series`]).
    pub fn with_default_reactions(self) -> Self {
        self.with_reaction(Arc::new(Parallel))
            .with_reaction(Arc::new(Series))
    }

    /// Builds the bus, validating the reaction table.
    ///
    /// # Errors
    /// - [`BusError::ReservedName`] when a reaction name collides with a
    ///   protected bus method
    /// - [`BusError::DuplicateReaction`] when two reactions share a name
    pub fn build(self) -> Result<EventBus, BusError> {
        let mut set = ReactionSet::new();
        for reaction in self.reactions {
            set.register(reaction)?;
        }
        Ok(EventBus::with_reactions(self.cfg, set))
    }
}
