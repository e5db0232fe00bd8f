//! Error types for the binary codec.

use std::fmt;
use std::io;

/// Errors that can occur while encoding or decoding a list.
///
/// I/O failures and malformed streams both surface here; neither is
/// recoverable locally. The caller decides whether to retry at a higher
/// level (for example by re-fetching the stream).
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error from the underlying sink or source.
    Io(io::Error),
    /// The stream ended in the middle of a value.
    Truncated {
        /// Human-readable description of what was being read.
        detail: String,
    },
    /// A varint continuation chain that never terminates within the
    /// maximum representable width, or whose value exceeds 64 bits.
    VarintOverflow {
        /// The maximum encoded width in bytes.
        max_bytes: usize,
    },
    /// A declared length too large to address on this platform.
    LengthOverflow {
        /// The length read from the stream.
        len: u64,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated { detail } => write!(f, "truncated stream: {detail}"),
            Self::VarintOverflow { max_bytes } => {
                write!(f, "varint does not terminate within {max_bytes} bytes")
            }
            Self::LengthOverflow { len } => {
                write!(f, "declared length {len} exceeds addressable size")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
