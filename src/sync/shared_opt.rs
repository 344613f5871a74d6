use core::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll, ready},
};
use std::sync::{Arc, Mutex, MutexGuard};

use futures::{FutureExt, future::BoxFuture};
use tracing::{debug, warn};

use crate::{
    error::{DeferredError, OptError},
    opt::Opt,
};

type Cell<T> = Arc<Mutex<Opt<T>>>;

fn lock<T>(cell: &Mutex<Opt<T>>) -> MutexGuard<'_, Opt<T>> {
    cell.lock().unwrap_or_else(|poisoned| {
        warn!("recovered a poisoned slot");
        let guard = poisoned.into_inner();
        cell.clear_poison();
        guard
    })
}

/// A live [`Opt`] that deferred mutations can be applied to
#[derive(Debug)]
pub struct SharedOpt<T> {
    cell: Cell<T>,
}
impl<T> SharedOpt<T> {
    #[must_use]
    pub fn new(opt: Opt<T>) -> Self {
        Self {
            cell: Arc::new(Mutex::new(opt)),
        }
    }
    #[must_use]
    pub fn some(value: T) -> Self {
        Self::new(Opt::some(value))
    }
    #[must_use]
    pub fn none() -> Self {
        Self::new(Opt::none())
    }

    /// Runs `f` on the slot as one synchronous step.
    ///
    /// `f` runs under the lock and so must never reach back into `self`.
    fn with<R>(&self, f: impl FnOnce(&mut Opt<T>) -> R) -> R {
        f(&mut lock(&self.cell))
    }
    #[must_use]
    pub fn snapshot(&self) -> Opt<T>
    where
        T: Clone,
    {
        self.with(|opt| opt.clone())
    }
    #[must_use]
    pub fn is_some(&self) -> bool {
        self.with(|opt| opt.is_some())
    }
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.with(|opt| opt.is_none())
    }

    /// Returns the prior value
    pub fn replace(&self, value: T) -> Opt<T> {
        self.with(|opt| opt.replace(value))
    }
    #[must_use = "use `insert` or `replace` to overwrite the value"]
    pub fn take(&self) -> Opt<T> {
        self.with(Opt::take)
    }
    pub fn insert(&self, value: T) {
        self.with(|opt| {
            opt.insert(value);
        });
    }
    #[must_use]
    pub fn get_or_insert(&self, value: T) -> T
    where
        T: Clone,
    {
        self.with(|opt| opt.get_or_insert(value).clone())
    }

    // Callbacks below run on a snapshot with the lock released, so they may
    // read or write this same instance.

    pub fn map<U>(&self, f: impl FnOnce(&T) -> anyhow::Result<U>) -> Opt<U>
    where
        T: Clone,
    {
        self.snapshot().map(f)
    }
    /// A failing `f` leaves the slot empty
    pub fn get_or_insert_with(&self, f: impl FnOnce() -> anyhow::Result<T>) -> Result<T, OptError>
    where
        T: Clone,
    {
        if let Some(value) = self.snapshot().into_option() {
            return Ok(value);
        }
        let value = Opt::none().get_or_insert_with(f)?.clone();
        Ok(self.get_or_insert(value))
    }
    /// Takes the value only if `f` answers `Ok(true)` for the value seen on entry
    pub fn take_if(&self, f: impl FnOnce(&T) -> anyhow::Result<bool>) -> Opt<T>
    where
        T: Clone,
    {
        if !self.snapshot().is_some_and(f) {
            return Opt::none();
        }
        self.take()
    }

    /// Schedules a replace that happens only once `source` succeeds.
    ///
    /// Returns the slot as it is now together with the pending write. The slot
    /// stays untouched until the returned [`DeferredReplace`] is driven to
    /// completion, and a failing `source` never writes.
    pub fn replace_deferred<F, E>(&self, source: F) -> (Opt<T>, DeferredReplace<T>)
    where
        T: Clone + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: Into<anyhow::Error> + 'static,
    {
        let snapshot = self.snapshot();
        let source = source.map(|res| res.map_err(Into::into)).boxed();
        let trigger = DeferredReplace {
            cell: Arc::clone(&self.cell),
            source: Some(source),
        };
        (snapshot, trigger)
    }
}
impl<T> Clone for SharedOpt<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}
impl<T> From<Opt<T>> for SharedOpt<T> {
    fn from(opt: Opt<T>) -> Self {
        Self::new(opt)
    }
}

/// A pending write of [`SharedOpt::replace_deferred`].
///
/// Writes at most once. Dropping it before it settles abandons the write.
#[must_use = "a deferred replace does nothing unless you `.await` or poll it"]
pub struct DeferredReplace<T> {
    cell: Cell<T>,
    source: Option<BoxFuture<'static, anyhow::Result<T>>>,
}
impl<T> DeferredReplace<T> {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.source.is_none()
    }
}
impl<T> Future for DeferredReplace<T> {
    type Output = Result<(), DeferredError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let Some(source) = self.source.as_mut() else {
            return Poll::Ready(Err(DeferredError::Settled));
        };
        let res = ready!(source.poll_unpin(cx));
        self.source = None;
        match res {
            Ok(value) => {
                let _prior = lock(&self.cell).replace(value);
                debug!("applied deferred replace");
                Poll::Ready(Ok(()))
            }
            Err(err) => {
                debug!(error = %err, "discarded deferred replace");
                Poll::Ready(Err(DeferredError::Source(err)))
            }
        }
    }
}
impl<T> fmt::Debug for DeferredReplace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredReplace")
            .field("settled", &self.is_settled())
            .finish_non_exhaustive()
    }
}
