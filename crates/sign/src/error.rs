//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during signature operations
///
/// Verification never produces an error: every failure mode there collapses
/// into a `false` result so callers cannot be used as a validity oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The computed response half of a signature is not canonically reduced.
    ///
    /// Signing checks its own output against the group order before emitting
    /// a signature; this firing means an implementation defect, not a
    /// user-triggerable condition.
    ResponseOutOfRange,

    /// Invalid key size
    InvalidKeySize { expected: usize, actual: usize },

    /// Invalid signature size
    InvalidSignatureSize { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ResponseOutOfRange => {
                write!(f, "response part of signature out of range")
            }
            Error::InvalidKeySize { expected, actual } => {
                write!(f, "invalid key size: expected {}, got {}", expected, actual)
            }
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
