use core::future::Future;

use futures::FutureExt;

use crate::async_opt::AsyncOpt;

use super::Opt;

/// Values that are themselves an option of some kind
pub trait IntoOpt {
    type Item;
    fn into_opt(self) -> Opt<Self::Item>;
}
impl<T> IntoOpt for Opt<T> {
    type Item = T;
    fn into_opt(self) -> Opt<T> {
        self
    }
}
impl<T> IntoOpt for Option<T> {
    type Item = T;
    fn into_opt(self) -> Opt<T> {
        self.into()
    }
}

impl<T> Opt<T> {
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        self.slot.ok_or(err)
    }
    pub fn ok_or_else<E>(self, mk_err: impl FnOnce() -> E) -> Result<T, E> {
        self.slot.ok_or_else(mk_err)
    }
}

impl<T: IntoOpt> Opt<T> {
    /// Collapses one level of nesting
    pub fn flatten(self) -> Opt<T::Item> {
        self.slot.map(IntoOpt::into_opt).unwrap_or_default()
    }
}

impl<T, E> Opt<Result<T, E>> {
    pub fn transpose_result(self) -> Result<Opt<T>, E> {
        match self.slot {
            None => Ok(Opt::none()),
            Some(Ok(value)) => Ok(Opt::some(value)),
            Some(Err(err)) => Err(err),
        }
    }
}

impl<F> Opt<F>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    /// Resolves to a value once the held future does; a none resolves at once
    pub fn transpose_awaitable(self) -> AsyncOpt<F::Output> {
        match self.slot {
            None => AsyncOpt::none(),
            Some(fut) => AsyncOpt::new(fut.map(Opt::some)),
        }
    }
}
