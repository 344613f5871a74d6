use thiserror::Error;

/// Reason code carried by every [`OptError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    NoneValueAccessed,
    NoneExpected,
    NoneUnwrapped,
    PredicateException,
}

#[derive(Debug, Error)]
pub enum OptError {
    /// The slot was read while empty
    #[error("accessed the value of an empty slot")]
    NoneValueAccessed,
    /// `expect` on an empty value; displays exactly the caller's message
    #[error("{0}")]
    NoneExpected(String),
    #[error("called `unwrap` on a none value")]
    NoneUnwrapped,
    /// A callback of a defaulting combinator failed
    #[error("callback failed")]
    PredicateException(#[source] anyhow::Error),
}
impl OptError {
    #[must_use]
    pub fn reason(&self) -> Reason {
        match self {
            Self::NoneValueAccessed => Reason::NoneValueAccessed,
            Self::NoneExpected(_) => Reason::NoneExpected,
            Self::NoneUnwrapped => Reason::NoneUnwrapped,
            Self::PredicateException(_) => Reason::PredicateException,
        }
    }

    /// Wrap a callback failure as [`OptError::PredicateException`].
    ///
    /// A failure that already is an [`OptError`] is returned unmodified.
    #[must_use]
    pub fn wrap(err: anyhow::Error) -> Self {
        match err.downcast::<Self>() {
            Ok(err) => err,
            Err(err) => Self::PredicateException(err),
        }
    }
}

#[derive(Debug, Error)]
pub enum DeferredError {
    #[error("deferred replace source failed")]
    Source(#[source] anyhow::Error),
    #[error("deferred replace already settled")]
    Settled,
}
