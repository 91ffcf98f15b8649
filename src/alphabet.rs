//! Bidirectional mapping between printable symbols and cipher codes.
//!
//! The cipher alphabet is the 95 consecutive printable ASCII characters
//! from space (code point 32) through tilde (code point 126). Each symbol
//! is assigned the code `codepoint - 32`, a bijection between the alphabet
//! and the integers 0..=94 the key matrix operates on. Ciphertext is built
//! from the same alphabet, so it survives any text-only transport.

use crate::error::HillCipherError;

/// Number of symbols in the cipher alphabet; also the modulus of the
/// arithmetic ring the cipher works in.
pub(crate) const ALPHABET_SIZE: i64 = 95;

/// Code point of the first alphabet symbol (space).
const ALPHABET_START: u32 = 32;

/// Code point of the last alphabet symbol (tilde).
const ALPHABET_END: u32 = 126;

/// Converts a symbol to its numeric code in `[0, 94]`.
///
/// # Parameters
/// - `symbol`: The character to encode.
///
/// # Returns
/// The code assigned to the symbol.
///
/// # Errors
/// Returns [`HillCipherError::InvalidCharacter`] if `symbol` lies outside
/// the printable range (code point below 32 or above 126, which covers
/// control characters and all non-ASCII text).
pub(crate) fn encode(symbol: char) -> Result<i64, HillCipherError> {
    let code_point = symbol as u32;
    if !(ALPHABET_START..=ALPHABET_END).contains(&code_point) {
        return Err(HillCipherError::InvalidCharacter(symbol));
    }
    Ok((code_point - ALPHABET_START) as i64)
}

/// Converts a numeric code in `[0, 94]` back to its symbol.
///
/// Total over the code range by construction. Callers only pass codes
/// produced by [`encode`] or by the mod-95 block transform, so the range
/// check is a debug assertion rather than a runtime error.
pub(crate) fn decode(code: i64) -> char {
    debug_assert!(
        (0..ALPHABET_SIZE).contains(&code),
        "code {} outside [0, 94]",
        code
    );
    ((code as u8) + ALPHABET_START as u8) as char
}
