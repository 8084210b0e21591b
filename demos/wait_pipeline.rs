//! Sequential dispatch: one handler in flight, accumulated results,
//! first-error short-circuit, and the unhandled sentinel.
//!
//! Run with: `cargo run --example wait_pipeline`

use evbus::{Event, EventBus, HandlerError, WaitOutcome};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = EventBus::default();

    let _validate = bus.on_wait_fn("order", |event| {
        match event.get("amount").and_then(|v| v.as_i64()) {
            Some(amount) if amount > 0 => Ok(Some(json!({ "validated": amount }))),
            _ => Err(HandlerError::new("order amount must be positive")),
        }
    });
    let _persist = bus.on_wait_fn("order", |_event| {
        // A handler may complete without contributing a result.
        println!("[persist] stored");
        Ok(None)
    });
    let _receipt = bus.on_wait_fn("order", |_event| Ok(Some(json!({ "receipt": "r-1" }))));

    // Happy path: results arrive in registration order, None is skipped.
    match bus.emit_wait(&Event::new("order").with_field("amount", 30)).await? {
        WaitOutcome::Completed(results) => println!("[done] {results:?}"),
        WaitOutcome::Unhandled(_) => unreachable!("handlers are registered"),
    }

    // Failure path: the first error stops the chain, later handlers never run.
    let bad = Event::new("order").with_field("amount", -1);
    match bus.emit_wait(&bad).await {
        Err(err) => println!("[error] {err}"),
        Ok(_) => unreachable!("validation rejects negative amounts"),
    }

    // No listeners: the event comes back as the unhandled sentinel.
    if let WaitOutcome::Unhandled(event) = bus.emit_wait(&Event::new("refund")).await? {
        println!("[unhandled] {:?}", event.type_tag());
    }

    Ok(())
}
