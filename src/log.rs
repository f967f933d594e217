//! Logging shims.
//!
//! With the `tracing` feature these are `tracing`'s own macros. Without it they
//! swallow their arguments, so call sites write `crate::log::debug!(...)` and
//! never need a `cfg`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __matcut_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __matcut_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__matcut_debug as debug, __matcut_warn as warn};
