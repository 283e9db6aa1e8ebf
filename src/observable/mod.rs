//! The `observable` module provides the building blocks for creating
//! observables, the sources of synchronous push-based streams.

use crate::observer::Observer;
use crate::subscription::subscribe::{
    Subscribeable, Subscriber, Subscription, UnsubscribeLogic,
};

/// The `Observable` struct represents a source of values that can be observed.
///
/// An `Observable` is an immutable, re-subscribable description of how to
/// produce a stream: it wraps a production function that, given a live
/// `Subscriber`, pushes items and eventually signals completion or failure,
/// returning a teardown. Observables are cold; nothing is produced until
/// `subscribe` is called, and every subscription re-runs production from
/// scratch against its own independent `Subscriber`.
///
/// # Example: observable from a finite sequence
///
/// ```
/// use rxs::{Observable, Subscribeable};
/// use rxs::subscribe::Subscriber;
///
/// let mut sequence = Observable::from_sequence(vec![1, 2, 3]);
///
/// let mut observer = Subscriber::on_next(|v| println!("Emitted {}", v));
/// observer.on_complete(|| println!("Completed"));
///
/// sequence.subscribe(observer);
/// ```
///
/// # Example: custom observable
///
/// The production function receives the `Subscriber`, emits through it on the
/// calling thread, and returns the teardown to run when the subscription ends.
///
/// ```
/// use rxs::{Observable, Observer, Subscribeable};
/// use rxs::subscribe::{Subscriber, UnsubscribeLogic};
///
/// let mut emit_10_observable = Observable::new(|mut subscriber| {
///     let mut i = 1;
///
///     while i <= 10 {
///         // Emit the value to the subscriber.
///         subscriber.next(i);
///         i += 1;
///     }
///     // Signal completion to the subscriber.
///     subscriber.complete();
///
///     // Return the empty teardown.
///     UnsubscribeLogic::Nil
/// });
///
/// let mut observer = Subscriber::on_next(|v| println!("Emitted {}", v));
/// observer.on_complete(|| println!("Completed"));
///
/// // Blocks until production is done, then returns the subscription handle.
/// emit_10_observable.subscribe(observer);
/// ```
pub struct Observable<T> {
    subscribe_fn: Box<dyn FnMut(Subscriber<T>) -> UnsubscribeLogic + Send>,
}

impl<T: 'static> Observable<T> {
    /// Creates a new `Observable` with the provided production function.
    ///
    /// The production function emits through the `Subscriber` it is given and
    /// returns the teardown for the subscription. It runs synchronously inside
    /// every `subscribe` call.
    ///
    /// A panic raised by the production function is not intercepted and not
    /// converted into an `error` notification; it propagates to the caller of
    /// `subscribe`.
    pub fn new(sf: impl FnMut(Subscriber<T>) -> UnsubscribeLogic + Send + 'static) -> Self {
        Observable {
            subscribe_fn: Box::new(sf),
        }
    }

    /// Creates an `Observable` that emits every item of a finite sequence in
    /// order and then completes.
    ///
    /// The sequence is cloned for each subscription, so subscribing multiple
    /// times yields independent full deliveries. The returned teardown's only
    /// effect is a log line through the [`log`] facade.
    pub fn from_sequence<I>(sequence: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + Send + 'static,
    {
        Observable::new(move |mut observer: Subscriber<T>| {
            for item in sequence.clone() {
                observer.next(item);
            }
            observer.complete();

            UnsubscribeLogic::Logic(Box::new(|| log::info!("unsubscribed")))
        })
    }
}

impl<T: 'static> Subscribeable for Observable<T> {
    type ObsType = T;

    fn subscribe(&mut self, s: Subscriber<Self::ObsType>) -> Subscription {
        let subscription = s.handle();
        let teardown = (self.subscribe_fn)(s);

        // Attachment happens even if production already terminated the
        // subscriber; in that case the teardown runs immediately.
        subscription.attach(teardown);
        subscription
    }
}
