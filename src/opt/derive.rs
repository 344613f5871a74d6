use core::future::Future;

use crate::{
    async_opt::{AsyncOpt, IntoAsyncOpt},
    attempt::attempt,
};

use super::Opt;

impl<T> Opt<T> {
    pub fn map<U>(&self, f: impl FnOnce(&T) -> anyhow::Result<U>) -> Opt<U> {
        self.slot.as_ref().and_then(|value| attempt(|| f(value))).into()
    }

    /// Empty unless `f` answers `Ok(true)`
    pub fn filter(&self, f: impl FnOnce(&T) -> anyhow::Result<bool>) -> Self
    where
        T: Clone,
    {
        if !self.is_some_and(f) {
            return Self::none();
        }
        self.clone()
    }

    pub fn and_then<U>(&self, f: impl FnOnce(&T) -> anyhow::Result<Opt<U>>) -> Opt<U> {
        self.slot
            .as_ref()
            .and_then(|value| attempt(|| f(value)))
            .unwrap_or_default()
    }

    /// Always returns a copy of `self`; the outcome of `f` is discarded
    pub fn inspect(&self, f: impl FnOnce(&T) -> anyhow::Result<()>) -> Self
    where
        T: Clone,
    {
        if let Some(value) = &self.slot {
            attempt(|| f(value));
        }
        self.clone()
    }

    pub fn or_else(&self, f: impl FnOnce() -> anyhow::Result<Self>) -> Self
    where
        T: Clone,
    {
        if self.is_some() {
            return self.clone();
        }
        attempt(f).unwrap_or_default()
    }

    pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
        match self.slot {
            Some(_) => other,
            None => Opt::none(),
        }
    }
    pub fn or(self, other: Self) -> Self {
        match self.slot {
            Some(_) => self,
            None => other,
        }
    }
    pub fn xor(self, other: Self) -> Self {
        match (self.slot, other.slot) {
            (Some(value), None) | (None, Some(value)) => Self::some(value),
            _ => Self::none(),
        }
    }
    pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
        self.slot.zip(other.slot).into()
    }
}

/// Overloads taking an alternative that is still in flight.
///
/// `self` is lifted into [`AsyncOpt`] and the same-named combinator runs there.
impl<T: Send + 'static> Opt<T> {
    pub fn and_async<U: Send + 'static>(self, other: impl IntoAsyncOpt<U>) -> AsyncOpt<U> {
        self.into_async().and(other)
    }
    pub fn or_async(self, other: impl IntoAsyncOpt<T>) -> AsyncOpt<T> {
        self.into_async().or(other)
    }
    pub fn xor_async(self, other: impl IntoAsyncOpt<T>) -> AsyncOpt<T> {
        self.into_async().xor(other)
    }
    /// Unlike [`Opt::and_then`], `f` owns the value: it runs once `self` has
    /// been lifted and resolved, so there is no slot left to borrow from.
    pub fn and_then_async<U, F, Fut>(self, f: F) -> AsyncOpt<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<Opt<U>>> + Send + 'static,
    {
        self.into_async().and_then(f)
    }
}
