use std::{error::Error, sync::Arc};

/// Receives push-based notifications from an observable stream.
///
/// A well-behaved stream makes zero or more `next` calls followed by at most
/// one terminal call, either `complete` or `error`. Implementors are expected
/// to enforce that contract themselves; `Subscriber` does so with a single
/// terminated flag.
pub trait Observer {
    type NextFnType;

    fn next(&mut self, _: Self::NextFnType);
    fn complete(&mut self);
    fn error(&mut self, _: Arc<dyn Error + Send + Sync>);
}
