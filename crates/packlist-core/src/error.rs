//! Error types for list operations.

use std::error::Error;
use std::fmt;

/// Errors from [`IntList`](crate::IntList) operations.
///
/// Every variant indicates a caller bug (an out-of-bounds access or a
/// malformed argument); none is retriable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An index beyond the current logical length.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The list's logical length at the time of the call.
        len: usize,
    },
    /// A range whose start lies beyond its end.
    InvalidRange {
        /// Start of the range (inclusive).
        from: usize,
        /// End of the range (exclusive).
        to: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidRange { from, to } => {
                write!(f, "invalid range: from {from} is greater than to {to}")
            }
        }
    }
}

impl Error for ListError {}
