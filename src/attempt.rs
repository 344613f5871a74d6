//! Callback failure policy.
//!
//! Derivation steps go through [`attempt`] and degrade to absence.
//! Steps that must produce a definite value go through [`surface`].

use tracing::{debug, trace};

use crate::error::OptError;

/// Run a derivation callback; a failure becomes [`None`]
pub(crate) fn attempt<U>(f: impl FnOnce() -> anyhow::Result<U>) -> Option<U> {
    match f() {
        Ok(v) => Some(v),
        Err(err) => {
            trace!(error = %err, "swallowed callback failure");
            None
        }
    }
}

/// Run a defaulting callback; a failure is wrapped by [`OptError::wrap`]
pub(crate) fn surface<U>(f: impl FnOnce() -> anyhow::Result<U>) -> Result<U, OptError> {
    f().map_err(|err| {
        let err = OptError::wrap(err);
        debug!(reason = ?err.reason(), "surfaced callback failure");
        err
    })
}
