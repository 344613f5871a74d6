use crate::{attempt::surface, error::OptError};

use super::Opt;

impl<T> Opt<T> {
    pub fn unwrap(self) -> Result<T, OptError> {
        self.slot.ok_or(OptError::NoneUnwrapped)
    }
    /// The error displays exactly `msg`
    pub fn expect(self, msg: &str) -> Result<T, OptError> {
        self.slot.ok_or_else(|| OptError::NoneExpected(msg.to_owned()))
    }
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        self.slot.unwrap_or(default)
    }
    #[must_use]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.slot.unwrap_or_default()
    }
    pub fn unwrap_or_else(self, mk_def: impl FnOnce() -> anyhow::Result<T>) -> Result<T, OptError> {
        match self.slot {
            Some(value) => Ok(value),
            None => surface(mk_def),
        }
    }

    /// A failing `f` answers `default`
    #[must_use]
    pub fn map_or<U>(&self, default: U, f: impl FnOnce(&T) -> anyhow::Result<U>) -> U {
        self.map(f).slot.unwrap_or(default)
    }
    /// A failing `f` falls back to `mk_def`; only a failing `mk_def` is surfaced
    pub fn map_or_else<U>(
        &self,
        mk_def: impl FnOnce() -> anyhow::Result<U>,
        f: impl FnOnce(&T) -> anyhow::Result<U>,
    ) -> Result<U, OptError> {
        match self.map(f).slot {
            Some(value) => Ok(value),
            None => surface(mk_def),
        }
    }

    /// Runs `f` on a value or `g` on none, surfacing either failure
    pub fn match_with<U>(
        &self,
        f: impl FnOnce(&T) -> anyhow::Result<U>,
        g: impl FnOnce() -> anyhow::Result<U>,
    ) -> Result<U, OptError> {
        match &self.slot {
            Some(value) => surface(|| f(value)),
            None => surface(g),
        }
    }
}
