use core::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::{
    FutureExt,
    future::{self, BoxFuture},
};

use crate::{attempt::attempt, opt::Opt};

/// An [`Opt`] that is still being computed
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct AsyncOpt<T> {
    fut: BoxFuture<'static, Opt<T>>,
}
impl<T: Send + 'static> AsyncOpt<T> {
    pub fn new(fut: impl Future<Output = Opt<T>> + Send + 'static) -> Self {
        Self { fut: fut.boxed() }
    }
    pub fn ready(opt: Opt<T>) -> Self {
        Self::new(future::ready(opt))
    }
    pub fn some(value: T) -> Self {
        Self::ready(Opt::some(value))
    }
    pub fn none() -> Self {
        Self::ready(Opt::none())
    }

    /// `other` is only awaited if `self` resolves to a value
    pub fn and<U: Send + 'static>(self, other: impl IntoAsyncOpt<U>) -> AsyncOpt<U> {
        let other = other.into_async();
        AsyncOpt::new(async move {
            let this = self.await;
            if this.is_none() {
                return Opt::none();
            }
            this.and(other.await)
        })
    }
    /// `other` is only awaited if `self` resolves to none
    pub fn or(self, other: impl IntoAsyncOpt<T>) -> Self {
        let other = other.into_async();
        Self::new(async move {
            let this = self.await;
            if this.is_some() {
                return this;
            }
            this.or(other.await)
        })
    }
    pub fn xor(self, other: impl IntoAsyncOpt<T>) -> Self {
        let other = other.into_async();
        Self::new(async move {
            let (this, other) = future::join(self, other).await;
            this.xor(other)
        })
    }

    pub fn map<U, F>(self, f: F) -> AsyncOpt<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> anyhow::Result<U> + Send + 'static,
    {
        AsyncOpt::new(async move {
            let Some(value) = self.await.into_option() else {
                return Opt::none();
            };
            Opt::from(attempt(|| f(value)))
        })
    }
    /// A failing `f` resolves to none
    pub fn and_then<U, F, Fut>(self, f: F) -> AsyncOpt<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<Opt<U>>> + Send + 'static,
    {
        AsyncOpt::new(async move {
            let Some(value) = self.await.into_option() else {
                return Opt::none();
            };
            let res = f(value).await;
            attempt(|| res).unwrap_or_default()
        })
    }
}
impl<T> Future for AsyncOpt<T> {
    type Output = Opt<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.fut.poll_unpin(cx)
    }
}
impl<T> fmt::Debug for AsyncOpt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncOpt").finish_non_exhaustive()
    }
}

/// Lifts a concrete [`Opt`] or a future of one into an [`AsyncOpt`]
pub trait IntoAsyncOpt<T> {
    fn into_async(self) -> AsyncOpt<T>;
}
impl<T: Send + 'static> IntoAsyncOpt<T> for Opt<T> {
    fn into_async(self) -> AsyncOpt<T> {
        AsyncOpt::ready(self)
    }
}
impl<T, F> IntoAsyncOpt<T> for F
where
    T: Send + 'static,
    F: Future<Output = Opt<T>> + Send + 'static,
{
    fn into_async(self) -> AsyncOpt<T> {
        AsyncOpt::new(self)
    }
}
