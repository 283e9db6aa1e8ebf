//! An `Observable` built from a finite sequence of mock request records. It
//! pushes every record to the subscriber in order, signals completion, and the
//! subscription is then explicitly cancelled.
//!
//! To run this demo, execute `cargo run --example from_sequence`.

use rxs::subscribe::Subscriber;
use rxs::{Observable, Subscribeable, Unsubscribeable};

#[derive(Clone, Debug)]
enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug)]
struct Request {
    method: Method,
    host: String,
    path: String,
    body: Option<String>,
}

fn main() {
    let requests = vec![
        Request {
            method: Method::Post,
            host: "service.example".to_string(),
            path: "user".to_string(),
            body: Some("User Name, age 26".to_string()),
        },
        Request {
            method: Method::Get,
            host: "service.example".to_string(),
            path: "user/3f5h67s4s".to_string(),
            body: None,
        },
    ];

    let mut requests_stream = Observable::from_sequence(requests);

    // Create the `Subscriber` with a `next` function, and optional `error`
    // and `complete` functions.
    let mut observer = Subscriber::on_next(|request: Request| {
        println!(
            "Handling {:?} {}/{} (body: {:?})",
            request.method, request.host, request.path, request.body
        );
    });
    observer.on_error(|e| eprintln!("Request stream failed: {}", e));
    observer.on_complete(|| println!("complete"));

    // Production is synchronous, so every record is handled before
    // `subscribe` returns.
    let subscription = requests_stream.subscribe(observer);

    // Already completed at this point; unsubscribing is an idempotent no-op.
    subscription.unsubscribe();
}
