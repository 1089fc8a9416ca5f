//! Error types for decorated text handling.
//!
//! Construction and rendering never fail; errors only come from parsing
//! rendering-mode names and from I/O in callers such as the `decorate` binary.

use std::fmt;
use std::io;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for decorated text operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading or writing text.
    Io(io::Error),
    /// Unrecognized output rendering mode name.
    InvalidRendering(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidRendering(s) => write!(
                f,
                "invalid output rendering: {s} (expected automatic, ansi or plaintext)"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidRendering(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRendering("fancy".to_string());
        let msg = err.to_string();
        assert!(msg.contains("invalid output rendering"));
        assert!(msg.contains("fancy"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.source().is_some());
    }
}
