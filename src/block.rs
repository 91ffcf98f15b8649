//! Splits text into fixed-size blocks of alphabet codes.
//!
//! Input whose length is not a whole number of blocks is right-padded with
//! a single space symbol before encoding, so the final block is always
//! complete. Padding silently grows the message by at most one symbol;
//! the padded text is returned alongside the blocks.

use crate::alphabet;
use crate::error::HillCipherError;

/// Number of symbols processed per block.
///
/// The key matrix dimensions derive from this value
/// (`KEY_LENGTH = BLOCK_SIZE²` in [`crate::key_matrix`]), so the blocker
/// and the transform cannot disagree on block geometry.
pub(crate) const BLOCK_SIZE: usize = 2;

/// A group of consecutive alphabet codes, one matrix-multiplication unit.
pub(crate) type Block = [i64; BLOCK_SIZE];

/// Splits `text` into blocks of alphabet codes, padding to a whole block.
///
/// # Parameters
/// - `text`: The plaintext to split.
///
/// # Returns
/// The ordered block sequence and the padded text actually encoded.
///
/// # Errors
/// Returns [`HillCipherError::InvalidCharacter`] on the first character
/// outside the alphabet; no partial block sequence is produced.
pub(crate) fn to_blocks(text: &str) -> Result<(Vec<Block>, String), HillCipherError> {
    let mut padded = String::from(text);
    if padded.chars().count() % BLOCK_SIZE != 0 {
        padded.push(' ');
    }

    let mut codes = Vec::with_capacity(padded.len());
    for symbol in padded.chars() {
        codes.push(alphabet::encode(symbol)?);
    }

    let blocks = codes
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| {
            let mut block = [0i64; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            block
        })
        .collect();

    Ok((blocks, padded))
}
