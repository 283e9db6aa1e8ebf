mod request_error;

use std::sync::{Arc, Mutex};

use rxs::{
    subscribe::{Subscriber, Subscription, UnsubscribeLogic},
    Observable, Observer, Subscribeable, Unsubscribeable,
};

use request_error::RequestError;

#[test]
fn from_sequence_preserves_order() {
    let emitted = Arc::new(Mutex::new(Vec::new()));
    let emitted_c = Arc::clone(&emitted);

    let o = Subscriber::on_next(move |v: &str| {
        emitted_c.lock().unwrap().push(v);
    });

    let mut s = Observable::from_sequence(vec!["a", "b", "c"]);
    s.subscribe(o);

    assert_eq!(
        *emitted.lock().unwrap(),
        vec!["a", "b", "c"],
        "items were not delivered in sequence order"
    );
}

#[test]
fn empty_handler_set_completes_without_fault() {
    let mut s = Observable::from_sequence(vec![1]);
    let subscription = s.subscribe(Subscriber::default());

    assert!(
        subscription.is_closed(),
        "sequence should have completed and closed the subscription"
    );
}

#[test]
fn resubscription_yields_independent_deliveries() {
    let mut s = Observable::from_sequence(vec![1, 2, 3]);

    let first = Arc::new(Mutex::new(Vec::new()));
    let first_c = Arc::clone(&first);
    let first_completes = Arc::new(Mutex::new(0));
    let first_completes_c = Arc::clone(&first_completes);

    let mut o = Subscriber::on_next(move |v: i32| first_c.lock().unwrap().push(v));
    o.on_complete(move || *first_completes_c.lock().unwrap() += 1);
    s.subscribe(o);

    let second = Arc::new(Mutex::new(Vec::new()));
    let second_c = Arc::clone(&second);
    let second_completes = Arc::new(Mutex::new(0));
    let second_completes_c = Arc::clone(&second_completes);

    let mut o = Subscriber::on_next(move |v: i32| second_c.lock().unwrap().push(v));
    o.on_complete(move || *second_completes_c.lock().unwrap() += 1);
    s.subscribe(o);

    assert_eq!(*first.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(*second.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(
        *first_completes.lock().unwrap(),
        1,
        "first subscription should see exactly one complete"
    );
    assert_eq!(
        *second_completes.lock().unwrap(),
        1,
        "second subscription should see exactly one complete"
    );
}

#[test]
fn consumer_cancels_mid_stream_from_next_handler() {
    let emitted = Arc::new(Mutex::new(Vec::new()));
    let emitted_c = Arc::clone(&emitted);
    let completed = Arc::new(Mutex::new(false));
    let completed_c = Arc::clone(&completed);

    // The handle is obtained before subscribing so the next handler can
    // capture it and cancel upon the first item.
    let cancel: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let cancel_c = Arc::clone(&cancel);

    let mut o = Subscriber::on_next(move |v: i32| {
        emitted_c.lock().unwrap().push(v);
        if let Some(s) = cancel_c.lock().unwrap().take() {
            s.unsubscribe();
        }
    });
    o.on_complete(move || *completed_c.lock().unwrap() = true);

    *cancel.lock().unwrap() = Some(o.handle());

    let mut s = Observable::from_sequence(vec![1, 2, 3]);
    s.subscribe(o);

    assert_eq!(
        *emitted.lock().unwrap(),
        vec![1],
        "items emitted after mid-stream cancellation reached the consumer"
    );
    assert!(
        !*completed.lock().unwrap(),
        "terminal complete reached the consumer after cancellation"
    );
}

#[test]
fn error_is_delivered_then_stream_goes_silent() {
    let emitted = Arc::new(Mutex::new(Vec::new()));
    let emitted_c = Arc::clone(&emitted);
    let errors = Arc::new(Mutex::new(Vec::new()));
    let errors_c = Arc::clone(&errors);
    let completes = Arc::new(Mutex::new(0));
    let completes_c = Arc::clone(&completes);

    let mut o = Subscriber::on_next(move |v: i32| emitted_c.lock().unwrap().push(v));
    o.on_error(move |e| errors_c.lock().unwrap().push(e.to_string()));
    o.on_complete(move || *completes_c.lock().unwrap() += 1);

    // A misbehaving production that keeps signaling after the failure.
    let mut s = Observable::new(|mut o: Subscriber<i32>| {
        o.next(1);
        o.error(Arc::new(RequestError {
            status: 500,
            message: "upstream gone".to_string(),
        }));
        o.next(2);
        o.complete();
        o.error(Arc::new(RequestError {
            status: 503,
            message: "still gone".to_string(),
        }));
        UnsubscribeLogic::Nil
    });

    s.subscribe(o);

    assert_eq!(*emitted.lock().unwrap(), vec![1]);
    assert_eq!(
        *errors.lock().unwrap(),
        vec!["request failed with status 500: upstream gone".to_string()],
        "the failure should be delivered exactly once"
    );
    assert_eq!(
        *completes.lock().unwrap(),
        0,
        "complete must not fire after error"
    );
}

#[test]
fn complete_excludes_error_and_repeats_are_dropped() {
    let errors = Arc::new(Mutex::new(0));
    let errors_c = Arc::clone(&errors);
    let completes = Arc::new(Mutex::new(0));
    let completes_c = Arc::clone(&completes);

    let mut o = Subscriber::<i32>::default();
    o.on_error(move |_| *errors_c.lock().unwrap() += 1);
    o.on_complete(move || *completes_c.lock().unwrap() += 1);

    let mut s = Observable::new(|mut o: Subscriber<i32>| {
        o.complete();
        o.complete();
        o.error(Arc::new(RequestError {
            status: 500,
            message: "late failure".to_string(),
        }));
        UnsubscribeLogic::Nil
    });

    s.subscribe(o);

    assert_eq!(
        *completes.lock().unwrap(),
        1,
        "complete should fire exactly once"
    );
    assert_eq!(
        *errors.lock().unwrap(),
        0,
        "error must not fire after complete"
    );
}

#[test]
fn next_without_handler_is_skipped_not_faulted() {
    let completes = Arc::new(Mutex::new(0));
    let completes_c = Arc::clone(&completes);

    let mut o = Subscriber::<i32>::default();
    o.on_complete(move || *completes_c.lock().unwrap() += 1);

    let mut s = Observable::from_sequence(vec![1, 2, 3]);
    s.subscribe(o);

    assert_eq!(*completes.lock().unwrap(), 1);
}
