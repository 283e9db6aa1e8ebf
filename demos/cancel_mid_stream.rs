//! A consumer that cancels a long sequence from inside its own `next` handler.
//! The `Subscription` handle is obtained from the `Subscriber` before
//! subscribing, so the handler can capture it; once it unsubscribes, every
//! further notification is dropped and the teardown runs.
//!
//! To run this demo, execute `cargo run --example cancel_mid_stream`.

use std::sync::{Arc, Mutex};

use rxs::subscribe::{Subscriber, Subscription, UnsubscribeLogic};
use rxs::{Observable, Observer, Subscribeable, Unsubscribeable};

fn main() {
    // Create a custom observable that emits values from 0 to 10000 and tears
    // down by releasing a mock resource.
    let mut observable = Observable::new(|mut o: Subscriber<u32>| {
        for i in 0..=10_000 {
            // Each call checks the terminated flag, so emission becomes a
            // no-op as soon as the consumer cancels.
            o.next(i);
        }
        o.complete();

        UnsubscribeLogic::Logic(Box::new(|| println!("resource released")))
    });

    let cancel: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let cancel_c = Arc::clone(&cancel);

    let mut observer = Subscriber::on_next(move |v| {
        println!("Emitted {}", v);
        if v == 2 {
            // Stop the stream; values 3..=10000 and `complete` never arrive.
            if let Some(s) = cancel_c.lock().unwrap().take() {
                s.unsubscribe();
            }
        }
    });
    observer.on_complete(|| println!("Completed"));

    *cancel.lock().unwrap() = Some(observer.handle());

    observable.subscribe(observer);
}
