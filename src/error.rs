//! Error taxonomy shared by all codecs and the path-level entry points.

use std::io;

/// Failure modes of decoding, encoding, and format dispatch.
///
/// Every failure is deterministic and non-retryable: feeding the same
/// bytes back in produces the same error. No partial results accompany
/// an error: decode yields a fully valid buffer or nothing.
#[non_exhaustive]
#[derive(Debug)]
pub enum CodecError {
    /// Malformed input: wrong magic token, non-integer or negative
    /// dimensions, truncated or overlong data, bad hex literal.
    /// Carries a human-readable reason.
    InvalidFormat(String),
    /// The file-name suffix matches no known codec (read side).
    /// Carries the offending file name.
    UnsupportedFormat(String),
    /// Encode was attempted with no image present.
    EmptyImage,
    /// Underlying storage failure, propagated as-is.
    Io(io::Error),
}

impl CodecError {
    /// Shorthand for an [`InvalidFormat`](CodecError::InvalidFormat)
    /// with a formatted reason.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidFormat(reason.into())
    }
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidFormat(reason) => write!(f, "invalid image data: {reason}"),
            Self::UnsupportedFormat(name) => {
                write!(f, "unsupported file extension: {name}")
            }
            Self::EmptyImage => f.write_str("no image to encode"),
            Self::Io(err) => write!(f, "i/o failure: {err}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
