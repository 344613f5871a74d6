#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

pub mod async_opt;
mod attempt;
pub mod error;
pub mod opt;
pub mod sync;

pub use async_opt::{AsyncOpt, IntoAsyncOpt};
pub use error::{DeferredError, OptError, Reason};
pub use opt::{IntoOpt, Opt, is_opt};
pub use sync::shared_opt::{DeferredReplace, SharedOpt};
