//! Provides structures and traits related to subscription management.
//!
//! This module includes types such as `Subscriber` for handling observed
//! values, errors, and completions, as well as `Subscription` for controlling
//! subscriptions to observables, and the `UnsubscribeLogic` enum for defining
//! teardown behavior.
pub mod subscribe;
