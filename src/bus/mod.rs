//! Dispatch core: registry, propagation state, dispatchers, facade.
//!
//! ## Contents
//! - [`EventBus`] — registration and dispatch entry points
//! - [`BusBuilder`] — construction with reactions and a custom resolver
//! - [`StopHandle`] — capability to deregister one registration
//! - [`WaitOutcome`] — sequential dispatch result
//!
//! ## Wiring
//! ```text
//! BusBuilder ──build()──► EventBus
//!                            ├── Registry    (type → handler list, ids)
//!                            ├── EmitStack   (per-emit propagate flags)
//!                            └── ReactionSet (named fan-out strategies)
//! ```

mod builder;
mod core;
mod registry;
mod scope;
mod wait;

pub use builder::BusBuilder;
pub use self::core::EventBus;
pub use registry::StopHandle;
pub use wait::WaitOutcome;

pub(crate) use wait::dispatch_sequential;
