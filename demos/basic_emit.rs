//! Synchronous fan-out: registration order, callbacks, cancellation, once.
//!
//! Run with: `cargo run --example basic_emit`

use std::sync::Arc;

use evbus::{Event, EventBus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = Arc::new(EventBus::default());

    // Handlers run in registration order.
    let _first = bus.on_fn("ticket", |event, _cb| {
        println!("[first]  got id {:?}", event.get("id"));
    });
    let _second = bus.on_fn("ticket", |event, cb| {
        // The callback value rides along untouched; downcast to use it.
        if let Some(notify) = cb.and_then(|c| c.downcast_ref::<fn(u32)>()) {
            notify(7);
        }
        println!("[second] got id {:?}", event.get("id"));
    });

    let notify: fn(u32) = |n| println!("[callback] notified with {n}");
    bus.emit_with(&Event::new("ticket").with_field("id", 42), Some(&notify))?;

    // once: the registration is consumed before the body runs.
    bus.once_fn("boot", |_event, _cb| println!("[boot] exactly once"));
    bus.emit(&Event::new("boot"))?;
    bus.emit(&Event::new("boot"))?; // no listeners left, silently a no-op

    // cancel() stops the remainder of the current propagation only.
    let canceller = Arc::clone(&bus);
    let _gate = bus.on_fn("alarm", move |event, _cb| {
        println!("[gate]   cancelling this propagation");
        canceller.cancel(event);
    });
    let _muted = bus.on_fn("alarm", |_event, _cb| {
        println!("[muted]  never reached");
    });
    bus.emit(&Event::new("alarm"))?;

    Ok(())
}
