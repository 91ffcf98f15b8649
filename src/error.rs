//! Error types for the Hill cipher library.

use thiserror::Error;

/// Errors produced by the Hill cipher library.
///
/// Every failure is deterministic in the inputs: retrying the same
/// operation with the same text and key cannot succeed. Callers should
/// surface these as validation errors rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HillCipherError {
    /// A character outside the 95-symbol printable alphabet was encountered.
    #[error("character {0:?} is outside the 95-symbol printable alphabet")]
    InvalidCharacter(char),
    /// The supplied key is not exactly 4 characters long.
    #[error("key must be exactly 4 characters long, found {0}")]
    InvalidKeyLength(usize),
    /// The key matrix determinant shares a factor with 95, so no inverse
    /// matrix exists and decryption is impossible with this key.
    #[error("key matrix determinant {0} has no inverse modulo 95")]
    NoModularInverse(i64),
}
