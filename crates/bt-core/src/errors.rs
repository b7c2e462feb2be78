//! Error types for banktime.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  The
//! [`ensure!`](crate::ensure) macro is the shorthand for early returns on
//! violated preconditions.

use thiserror::Error;

/// The top-level error type used throughout banktime.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date arithmetic left the representable range, or landed on a local
    /// time that does not exist in the target zone.
    #[error("date error: {0}")]
    Date(String),

    /// An IANA time-zone identifier could not be resolved.
    #[error("unknown time zone: {name}")]
    UnknownZone {
        /// The identifier that failed to resolve.
        name: String,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout banktime.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bt_core::{ensure, errors::Error};
/// fn month(m: u32) -> bt_core::errors::Result<u32> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(7).is_ok());
/// assert!(matches!(month(13), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
