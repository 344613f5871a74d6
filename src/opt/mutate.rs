use crate::{attempt::surface, error::OptError};

use super::Opt;

impl<T> Opt<T> {
    pub fn insert(&mut self, value: T) -> &mut T {
        self.slot.insert(value)
    }

    /// Writes `value` only if empty
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.slot.get_or_insert(value)
    }
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.slot.get_or_insert_with(T::default)
    }
    /// A failing `f` leaves the slot empty
    pub fn get_or_insert_with(
        &mut self,
        f: impl FnOnce() -> anyhow::Result<T>,
    ) -> Result<&mut T, OptError> {
        if self.is_none() {
            let value = surface(f)?;
            self.slot = Some(value);
        }
        self.value_mut()
    }

    /// Returns the prior value
    #[must_use = "use `insert` to discard the prior value"]
    pub fn replace(&mut self, value: T) -> Self {
        Self {
            slot: self.slot.replace(value),
        }
    }

    #[must_use = "dropping the taken value discards it; assign `Opt::none()` to clear"]
    pub fn take(&mut self) -> Self {
        Self {
            slot: self.slot.take(),
        }
    }
    /// Takes the value only if `f` answers `Ok(true)`
    pub fn take_if(&mut self, f: impl FnOnce(&T) -> anyhow::Result<bool>) -> Self {
        if !self.is_some_and(f) {
            return Self::none();
        }
        self.take()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, error::Error as _};

    use anyhow::bail;

    use crate::error::Reason;

    use super::*;

    #[test]
    fn test_insert() {
        let mut opt = Opt::some(1);
        assert_eq!(*opt.insert(2), 2);
        assert_eq!(opt, Opt::some(2));
        let mut opt = Opt::none();
        *opt.insert(2) += 1;
        assert_eq!(opt, Opt::some(3));
    }

    #[test]
    fn test_get_or_insert() {
        let mut opt = Opt::none();
        assert_eq!(*opt.get_or_insert(5), 5);
        assert_eq!(opt, Opt::some(5));
        assert_eq!(*opt.get_or_insert(6), 5);
        assert_eq!(opt, Opt::some(5));

        let mut opt = Opt::<u8>::none();
        assert_eq!(*opt.get_or_insert_default(), 0);
        assert_eq!(opt, Opt::some(0));
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut opt = Opt::none();
        assert_eq!(*opt.get_or_insert_with(|| Ok(5)).unwrap(), 5);
        assert_eq!(opt, Opt::some(5));

        let called = Cell::new(false);
        let value = opt
            .get_or_insert_with(|| {
                called.set(true);
                Ok(6)
            })
            .unwrap();
        assert_eq!(*value, 5);
        assert!(!called.get());
    }

    #[test]
    fn test_get_or_insert_with_failure() {
        let mut opt = Opt::<i32>::none();
        let err = opt.get_or_insert_with(|| bail!("boom")).unwrap_err();
        assert_eq!(err.reason(), Reason::PredicateException);
        assert_eq!(err.source().unwrap().to_string(), "boom");
        assert!(opt.is_none());

        let err = opt
            .get_or_insert_with(|| Ok(Opt::<i32>::none().unwrap()?))
            .unwrap_err();
        assert_eq!(err.reason(), Reason::NoneUnwrapped);
        assert!(opt.is_none());
    }

    #[test]
    fn test_replace() {
        let mut opt = Opt::some(2);
        let prior = opt.replace(5);
        assert_eq!(prior, Opt::some(2));
        assert_eq!(opt, Opt::some(5));

        let mut opt = Opt::none();
        let prior = opt.replace(5);
        assert_eq!(prior, Opt::none());
        assert_eq!(opt, Opt::some(5));

        let _ = opt.replace(6);
        assert_eq!(prior, Opt::none());
    }

    #[test]
    fn test_take() {
        let mut opt = Opt::some(2);
        let taken = opt.take();
        assert_eq!(taken, Opt::some(2));
        assert!(opt.is_none());
        assert_eq!(opt.take(), Opt::none());
        assert!(opt.is_none());

        opt.insert(3);
        assert_eq!(taken, Opt::some(2));
    }

    #[test]
    fn test_take_if() {
        let mut opt = Opt::some(2);
        assert_eq!(opt.take_if(|v| Ok(*v == 3)), Opt::none());
        assert_eq!(opt, Opt::some(2));

        assert_eq!(opt.take_if(|_| bail!("boom")), Opt::none());
        assert_eq!(opt, Opt::some(2));

        assert_eq!(opt.take_if(|v| Ok(*v == 2)), Opt::some(2));
        assert!(opt.is_none());

        assert_eq!(opt.take_if(|_| Ok(true)), Opt::none());
        assert!(opt.is_none());
    }
}
