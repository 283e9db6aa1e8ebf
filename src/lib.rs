//! Minimal synchronous push-based observable streams.
//!
//! `rxs` implements the core of the observer pattern used throughout
//! event-driven systems: an [`Observable`] wraps a production function that
//! pushes a finite stream of items to a [`Subscriber`] over three channels,
//! `next`, `error`, and `complete`, and every subscription hands back a
//! [`Subscription`] for explicit, idempotent cancellation.
//!
//! The protocol guarantees enforced by [`Subscriber`]:
//!
//! - items are delivered in production order;
//! - at most one terminal signal (`error` or `complete`) ever reaches the
//!   consumer;
//! - after a terminal signal or an unsubscribe, every further notification is
//!   silently dropped;
//! - the teardown returned by the production function runs exactly once, by
//!   whichever of error, completion, or explicit cancellation comes first.
//!
//! Production is fully synchronous: `subscribe` drives the production function
//! to completion on the calling thread before returning. There is no
//! scheduling, no backpressure, and no operator algebra; each subscription
//! re-runs production from scratch.
//!
//! ```
//! use rxs::{Observable, Subscribeable, Unsubscribeable};
//! use rxs::subscribe::Subscriber;
//!
//! let mut values = Observable::from_sequence(vec![1, 2, 3]);
//!
//! let mut observer = Subscriber::on_next(|v| println!("Emitted {}", v));
//! observer.on_complete(|| println!("Completed"));
//!
//! let subscription = values.subscribe(observer);
//! subscription.unsubscribe();
//! ```
//!
//! [`Subscriber`]: crate::subscription::subscribe::Subscriber
//! [`Subscription`]: crate::subscription::subscribe::Subscription

pub mod observable;
pub mod observer;
pub mod subscription;

pub use observable::Observable;
pub use observer::Observer;
pub use subscription::subscribe::{Subscribeable, Unsubscribeable};

pub use subscription::subscribe;
