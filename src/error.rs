//! The error type for fallible [`ZString`](crate::ZString) operations.

use thiserror::Error;

/// Failure kinds reported by fallible [`ZString`](crate::ZString) operations.
///
/// Every fallible operation returns `Result<_, ZStringError>`; success takes
/// the place of an explicit "no error" variant.  On any `Err` the string the
/// operation was called on is left byte-for-byte unchanged.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ZStringError {
    /// The buffer could not grow to hold the result of the operation.
    #[error("out of memory")]
    OutOfMemory,
    /// An index or range is outside the operation's preconditions, or input
    /// bytes are not well-formed UTF-8.
    #[error("invalid range")]
    InvalidRange,
}
