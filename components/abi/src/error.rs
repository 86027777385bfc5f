//! Error types for the ABI codec.

use crate::Type;
use thiserror::Error;

/// Errors produced while tagging, encoding or decoding values.
///
/// Every error is a deterministic function of the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Operation attempted on the unset tag ([`Type::Invalid`])
    #[error("invalid type")]
    InvalidType,

    /// Raw tag outside the defined kinds
    #[error("unrecognized type: {0}")]
    UnrecognizedType(u64),

    /// Payload's native type is not the one its tag requires
    #[error("expected type {expected}, got {actual}")]
    TypeMismatch {
        /// Tag the payload was supposed to satisfy
        expected: Type,
        /// Name of the payload's actual native type
        actual: &'static str,
    },

    /// Native value of a type no kind maps to
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),
}

/// Result type for ABI operations
pub type AbiResult<T> = Result<T, AbiError>;
