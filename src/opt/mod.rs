use core::{any::Any, fmt};

use crate::{attempt::attempt, error::OptError};

mod convert;
mod default;
mod derive;
mod mutate;

pub use convert::IntoOpt;

/// A value that may or may not be present.
///
/// - `&self` combinators derive a new value and never touch the slot
/// - `&mut self` operations write the slot in one step
/// - `self` conversions hand the payload over
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opt<T> {
    slot: Option<T>,
}
impl<T> Opt<T> {
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self { slot: Some(value) }
    }
    #[must_use]
    pub const fn none() -> Self {
        Self { slot: None }
    }

    #[must_use]
    pub const fn is_some(&self) -> bool {
        self.slot.is_some()
    }
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.slot.is_none()
    }
    /// A failing `f` answers `false`
    #[must_use]
    pub fn is_some_and(&self, f: impl FnOnce(&T) -> anyhow::Result<bool>) -> bool {
        let Some(value) = &self.slot else {
            return false;
        };
        attempt(|| f(value)).unwrap_or(false)
    }
    /// A failing `f` answers `true`
    #[must_use]
    pub fn is_none_or(&self, f: impl FnOnce(&T) -> anyhow::Result<bool>) -> bool {
        let Some(value) = &self.slot else {
            return true;
        };
        attempt(|| f(value)).unwrap_or(true)
    }

    pub(crate) fn value_mut(&mut self) -> Result<&mut T, OptError> {
        self.slot.as_mut().ok_or(OptError::NoneValueAccessed)
    }

    #[must_use]
    pub fn as_ref(&self) -> Opt<&T> {
        Opt {
            slot: self.slot.as_ref(),
        }
    }
    #[must_use]
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        Opt {
            slot: self.slot.as_mut(),
        }
    }
    #[must_use]
    pub const fn as_option(&self) -> &Option<T> {
        &self.slot
    }
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.slot
    }
    pub fn iter(&self) -> core::option::Iter<'_, T> {
        self.slot.iter()
    }
}
impl<T> Default for Opt<T> {
    fn default() -> Self {
        Self::none()
    }
}
impl<T> From<Option<T>> for Opt<T> {
    fn from(slot: Option<T>) -> Self {
        Self { slot }
    }
}
impl<T> From<Opt<T>> for Option<T> {
    fn from(opt: Opt<T>) -> Self {
        opt.slot
    }
}
impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slot.into_iter()
    }
}
impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = core::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}
impl<T: fmt::Debug> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => write!(f, "Some {{ {value:?} }}"),
            None => write!(f, "None"),
        }
    }
}

/// Whether a type-erased `value` is an [`Opt<T>`]
#[must_use]
pub fn is_opt<T: Any>(value: &dyn Any) -> bool {
    value.is::<Opt<T>>()
}

#[cfg(test)]
mod tests {
    use crate::error::Reason;

    use super::*;

    #[test]
    fn test_some_of_any_value() {
        let unit = Opt::some(());
        assert!(unit.is_some());
        assert_eq!(unit.unwrap().unwrap(), ());

        let nested_none = Opt::some(None::<i32>);
        assert!(nested_none.is_some());
        assert_eq!(nested_none.unwrap().unwrap(), None);

        let zero = Opt::some(0);
        assert!(zero.is_some());
        assert!(!zero.is_none());
        assert_eq!(zero.unwrap().unwrap(), 0);
    }

    #[test]
    fn test_none() {
        let mut none = Opt::<i32>::none();
        assert!(none.is_none());
        assert!(!none.is_some());
        assert_eq!(none.value_mut().unwrap_err().reason(), Reason::NoneValueAccessed);
        assert_eq!(Opt::<i32>::default(), none);
    }

    #[test]
    fn test_is_some_and() {
        assert!(Opt::some(2).is_some_and(|v| Ok(*v == 2)));
        assert!(!Opt::some(2).is_some_and(|v| Ok(*v == 3)));
        assert!(!Opt::<i32>::none().is_some_and(|_| Ok(true)));
        assert!(!Opt::some(2).is_some_and(|_| Err(anyhow::anyhow!("boom"))));
    }

    #[test]
    fn test_is_none_or() {
        assert!(Opt::<i32>::none().is_none_or(|_| Ok(false)));
        assert!(Opt::some(2).is_none_or(|v| Ok(*v == 2)));
        assert!(!Opt::some(2).is_none_or(|v| Ok(*v == 3)));
        assert!(Opt::some(2).is_none_or(|_| Err(anyhow::anyhow!("boom"))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Opt::<i32>::none().to_string(), "None");
        assert_eq!(Opt::some(2).to_string(), "Some { 2 }");
        assert_eq!(Opt::some("a").to_string(), "Some { \"a\" }");
        assert_eq!(format!("{:?}", Opt::some(2)), "Some(2)");
        assert_eq!(format!("{:?}", Opt::<i32>::none()), "None");
    }

    #[test]
    fn test_is_opt() {
        let opt: Box<dyn Any> = Box::new(Opt::some(1_u8));
        assert!(is_opt::<u8>(opt.as_ref()));
        assert!(!is_opt::<u16>(opt.as_ref()));
        let plain: Box<dyn Any> = Box::new(1_u8);
        assert!(!is_opt::<u8>(plain.as_ref()));
    }

    #[test]
    fn test_option_interop() {
        let opt: Opt<i32> = Some(3).into();
        assert_eq!(opt.as_option(), &Some(3));
        assert_eq!(Option::<i32>::from(opt.clone()), Some(3));
        assert_eq!(opt.iter().copied().sum::<i32>(), 3);
        assert_eq!(opt.into_iter().collect::<Vec<_>>(), [3]);
        assert!(Opt::none() < Opt::some(i32::MIN));
    }
}
