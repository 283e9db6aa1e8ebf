use std::{
    error::Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use crate::observer::Observer;

/// A trait for types that can be subscribed to, allowing consumers to receive
/// values emitted by an observable stream.
pub trait Subscribeable {
    /// The type of items emitted by the observable stream.
    type ObsType;

    /// Subscribes to the observable stream and specifies how to handle emitted values.
    ///
    /// The `Subscriber` parameter defines the behavior for processing values
    /// emitted by the observable stream. Production runs synchronously inside
    /// this call and finishes before it returns.
    ///
    /// The returned `Subscription` allows the caller to cancel the subscription
    /// and trigger its teardown.
    fn subscribe(&mut self, s: Subscriber<Self::ObsType>) -> Subscription;
}

/// A trait for types that can be unsubscribed, allowing the clean release of
/// resources associated with a subscription.
pub trait Unsubscribeable {
    /// Unsubscribes from a subscription and releases associated resources.
    ///
    /// Terminates the subscription, after which no further notifications reach
    /// the consumer, and runs the teardown attached to it. Unsubscribing is
    /// idempotent: the teardown runs at most once per subscription no matter
    /// how many handles request it or whether a terminal signal already ran it.
    fn unsubscribe(self);
}

type NextFn<T> = Box<dyn FnMut(T) + Send>;
type CompleteFn = Box<dyn FnMut() + Send>;
type ErrorFn = Box<dyn FnMut(Arc<dyn Error + Send + Sync>) + Send>;

/// Termination state shared by a `Subscriber` and every `Subscription` handle
/// cloned from it.
///
/// The flag is the entire state machine: `active -> terminated`, with the
/// terminated state absorbing all further signals. The teardown slot is locked
/// only long enough to move the logic out, so a consumer handler may
/// unsubscribe re-entrantly from inside its own `next` call without deadlock.
pub(crate) struct SubscriptionState {
    terminated: AtomicBool,
    teardown: Mutex<UnsubscribeLogic>,
}

impl SubscriptionState {
    fn new() -> Self {
        SubscriptionState {
            terminated: AtomicBool::new(false),
            teardown: Mutex::new(UnsubscribeLogic::Nil),
        }
    }

    pub(crate) fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Acquire)
    }

    pub(crate) fn terminate(&self) {
        self.terminated.store(true, Ordering::Release);
        log::trace!("subscription terminated");
        // Taking the logic out of the slot makes the teardown at-most-once.
        self.take_teardown().unsubscribe();
    }

    // Finalizes teardown attachment after production has run. If production
    // already terminated the subscription the teardown runs right away instead
    // of being stored, so a synchronously completed subscription never holds an
    // unreleased teardown.
    pub(crate) fn attach(&self, teardown: UnsubscribeLogic) {
        let mut slot = self.teardown.lock().unwrap();
        if self.is_terminated() {
            drop(slot);
            teardown.unsubscribe();
        } else {
            *slot = teardown;
        }
    }

    fn take_teardown(&self) -> UnsubscribeLogic {
        std::mem::replace(&mut *self.teardown.lock().unwrap(), UnsubscribeLogic::Nil)
    }
}

/// A type that acts as an observer, allowing users to handle emitted values,
/// errors, and completion when subscribing to an `Observable`.
///
/// All three handlers are optional; a missing handler turns that channel into a
/// no-op without affecting the protocol. Users can create a `Subscriber` with
/// the `new` method providing all handlers at once, start from `on_next` or
/// `default` and fill in the rest with the `on_error` and `on_complete`
/// setters.
///
/// Once terminated, by a terminal signal or by unsubscribing, a `Subscriber`
/// drops every further notification.
pub struct Subscriber<NextFnType> {
    next_fn: Option<NextFn<NextFnType>>,
    complete_fn: Option<CompleteFn>,
    error_fn: Option<ErrorFn>,
    state: Arc<SubscriptionState>,
}

impl<NextFnType> Subscriber<NextFnType> {
    /// Creates a new `Subscriber` instance with custom handling functions for
    /// emitted values, errors, and completion.
    pub fn new(
        next_fn: impl FnMut(NextFnType) + 'static + Send,
        error_fn: impl FnMut(Arc<dyn Error + Send + Sync>) + 'static + Send,
        complete_fn: impl FnMut() + 'static + Send,
    ) -> Self {
        Subscriber {
            next_fn: Some(Box::new(next_fn)),
            complete_fn: Some(Box::new(complete_fn)),
            error_fn: Some(Box::new(error_fn)),
            state: Arc::new(SubscriptionState::new()),
        }
    }

    /// Create a new `Subscriber` with the provided `next` function and no
    /// `error` or `complete` handlers.
    pub fn on_next(next_fn: impl FnMut(NextFnType) + 'static + Send) -> Self {
        Subscriber {
            next_fn: Some(Box::new(next_fn)),
            complete_fn: None,
            error_fn: None,
            state: Arc::new(SubscriptionState::new()),
        }
    }

    /// Set the completion function for the `Subscriber`.
    ///
    /// The provided closure will be called when the observable completes its
    /// emission sequence.
    pub fn on_complete(&mut self, complete_fn: impl FnMut() + 'static + Send) {
        self.complete_fn = Some(Box::new(complete_fn));
    }

    /// Set the error-handling function for the `Subscriber`.
    ///
    /// The provided closure will be called when the observable signals a
    /// failure. It takes an `Arc` wrapping a trait object that implements the
    /// `Error`, `Send`, and `Sync` traits as its parameter.
    pub fn on_error(
        &mut self,
        error_fn: impl FnMut(Arc<dyn Error + Send + Sync>) + 'static + Send,
    ) {
        self.error_fn = Some(Box::new(error_fn));
    }

    /// Returns a `Subscription` handle sharing this subscriber's termination
    /// state.
    ///
    /// The handle can be obtained before subscribing, which lets a consumer
    /// capture it in its own `next` handler and cancel the stream mid-emission.
    #[must_use]
    pub fn handle(&self) -> Subscription {
        Subscription::new(Arc::clone(&self.state))
    }

    /// Terminates this subscriber directly, without going through a
    /// `Subscription` handle.
    ///
    /// Safe to call any number of times; the attached teardown runs at most
    /// once. Production functions use this to cancel their own emission
    /// mid-stream.
    pub fn unsubscribe(&mut self) {
        self.state.terminate();
    }

    /// Whether a terminal signal or an unsubscribe has ended this subscription.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.is_terminated()
    }
}

impl<NextFnType> Default for Subscriber<NextFnType> {
    /// The empty handler set: every notification channel is a no-op.
    fn default() -> Self {
        Subscriber {
            next_fn: None,
            complete_fn: None,
            error_fn: None,
            state: Arc::new(SubscriptionState::new()),
        }
    }
}

impl<T> Observer for Subscriber<T> {
    type NextFnType = T;

    fn next(&mut self, v: Self::NextFnType) {
        if self.state.is_terminated() {
            return;
        }
        if let Some(nfn) = &mut self.next_fn {
            (nfn)(v);
        }
    }

    fn complete(&mut self) {
        if self.state.is_terminated() {
            return;
        }
        if let Some(cfn) = &mut self.complete_fn {
            (cfn)();
        }
        self.state.terminate();
    }

    fn error(&mut self, observable_error: Arc<dyn Error + Send + Sync>) {
        if self.state.is_terminated() {
            return;
        }
        if let Some(efn) = &mut self.error_fn {
            (efn)(observable_error);
        }
        self.state.terminate();
    }
}

/// Represents a subscription to an observable, allowing control over the
/// subscription.
///
/// Subscribing to an `Observable` returns a `Subscription` instance. The
/// subscription can be used to cancel the stream and run its teardown. It is
/// cheap to clone; every clone controls the same underlying subscription, and
/// unsubscribing any number of clones has the effect of unsubscribing once.
#[derive(Clone)]
pub struct Subscription {
    state: Arc<SubscriptionState>,
}

impl Subscription {
    pub(crate) fn new(state: Arc<SubscriptionState>) -> Self {
        Subscription { state }
    }

    pub(crate) fn attach(&self, teardown: UnsubscribeLogic) {
        self.state.attach(teardown);
    }

    /// Whether a terminal signal or an unsubscribe has ended this subscription.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.is_terminated()
    }
}

impl Unsubscribeable for Subscription {
    fn unsubscribe(self) {
        self.state.terminate();
    }
}

/// Enumerates various teardown logic options for a subscription.
///
/// A production function returns one of these from `Observable::new`'s closure;
/// it runs once when the subscription ends, by error, completion, or an
/// explicit unsubscribe, whichever comes first.
pub enum UnsubscribeLogic {
    /// No specific unsubscribe logic.
    Nil,

    /// If one subscription depends on another. Wrapped subscription's
    /// unsubscribe will be called upon unsubscribing.
    Wrapped(Box<Subscription>),

    /// Unsubscribe logic defined by a function.
    Logic(Box<dyn FnOnce() + Send>),
}

impl UnsubscribeLogic {
    pub(crate) fn unsubscribe(self) {
        match self {
            UnsubscribeLogic::Nil => (),
            UnsubscribeLogic::Logic(fnc) => fnc(),
            UnsubscribeLogic::Wrapped(subscription) => subscription.unsubscribe(),
        }
    }
}
