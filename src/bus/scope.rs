//! # Per-emit propagation state.
//!
//! Every synchronous `emit` pushes one frame onto the bus's emit stack:
//! the address of the event being propagated plus a propagate flag. The
//! dispatcher polls its frame between handler invocations; `cancel(event)`
//! flips the flag of every frame whose event address matches.
//!
//! ## Identity
//! Frames record the address of the `&Event` handed to `emit`. A handler
//! cancelling the reference it received hits the live frame; a different
//! event object of the same type misses (cancellation never bleeds across
//! emits). Addresses are only consulted while the borrow that produced them
//! is alive, so they cannot alias a recycled allocation.
//!
//! ## Re-entrancy
//! Nested emits push nested frames. Cancelling an event object that is
//! propagating at two nesting depths flips both frames. Frames are popped by
//! a drop guard, so a panicking handler unwinds the stack correctly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::events::Event;

struct Frame {
    token: u64,
    event_addr: usize,
    propagate: bool,
}

/// Stack of in-flight synchronous emits for one bus.
pub(crate) struct EmitStack {
    frames: Mutex<Vec<Frame>>,
    next_token: AtomicU64,
}

impl EmitStack {
    pub(crate) fn new() -> Self {
        Self {
            frames: Mutex::new(Vec::new()),
            next_token: AtomicU64::new(1),
        }
    }

    /// Opens a propagation frame for `event`; the frame lives until the
    /// returned guard drops.
    pub(crate) fn enter<'a>(&'a self, event: &Event) -> EmitGuard<'a> {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        let mut frames = self.frames.lock().expect("emit stack lock poisoned");
        frames.push(Frame {
            token,
            event_addr: addr_of(event),
            propagate: true,
        });
        EmitGuard { stack: self, token }
    }

    /// Stops propagation of every frame currently carrying `event`.
    ///
    /// Safe no-op when the event is not propagating.
    pub(crate) fn cancel_for(&self, event: &Event) {
        let addr = addr_of(event);
        let mut frames = self.frames.lock().expect("emit stack lock poisoned");
        for frame in frames.iter_mut() {
            if frame.event_addr == addr {
                frame.propagate = false;
            }
        }
    }

    fn is_propagating(&self, token: u64) -> bool {
        let frames = self.frames.lock().expect("emit stack lock poisoned");
        frames
            .iter()
            .find(|f| f.token == token)
            .map(|f| f.propagate)
            .unwrap_or(false)
    }

    fn release(&self, token: u64) {
        let mut frames = self.frames.lock().expect("emit stack lock poisoned");
        frames.retain(|f| f.token != token);
    }
}

#[inline]
fn addr_of(event: &Event) -> usize {
    event as *const Event as usize
}

/// Drop guard for one propagation frame.
pub(crate) struct EmitGuard<'a> {
    stack: &'a EmitStack,
    token: u64,
}

impl EmitGuard<'_> {
    /// True while this frame's propagate flag holds.
    pub(crate) fn propagating(&self) -> bool {
        self.stack.is_propagating(self.token)
    }
}

impl Drop for EmitGuard<'_> {
    fn drop(&mut self) {
        self.stack.release(self.token);
    }
}
