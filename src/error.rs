use thiserror::Error;

use crate::Tag;

/// Specific kinds of errors that can occur when decoding or inspecting
/// tagpack data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A read wanted `needed` bytes but only `available` were left from the
    /// point where it started.
    #[error("truncated input: need {needed} bytes, have {available}")]
    TruncatedInput { needed: u64, available: usize },

    #[error("unknown tag: {0:#x}")]
    UnknownTag(u64),

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: Tag, actual: Tag },

    #[error("invalid UTF-8 in bytes value")]
    InvalidUtf8,

    #[error("extra data after decoding: {bytes_remaining} bytes remaining")]
    ExtraData { bytes_remaining: usize },
}

/// Error type returned when decoding tagpack data or accessing a value as the
/// wrong kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("tagpack error: {kind}")]
pub struct Error {
    /// The specific kind of error that occurred.
    kind: ErrorKind,
}

impl Error {
    /// Creates a new Error with the given kind.
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the specific kind of error that occurred.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) const fn type_mismatch(expected: Tag, actual: Tag) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }
}

/// Result type for tagpack operations.
pub type Result<T> = std::result::Result<T, Error>;
