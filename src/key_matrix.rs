//! Builds the key matrix over the cipher ring and its modular inverse.
//!
//! A key is exactly [`KEY_LENGTH`] alphabet symbols, laid row-major into a
//! [`BLOCK_SIZE`] × [`BLOCK_SIZE`] matrix of codes. Encryption uses the
//! matrix directly; decryption needs the inverse, which exists only when
//! the determinant is coprime to 95.

use crate::alphabet;
use crate::block::BLOCK_SIZE;
use crate::error::HillCipherError;
use crate::modmath;

/// Required key length: one symbol per key matrix entry.
pub(crate) const KEY_LENGTH: usize = BLOCK_SIZE * BLOCK_SIZE;

/// A `BLOCK_SIZE` × `BLOCK_SIZE` matrix of alphabet codes modulo 95.
///
/// Built fresh from the caller-supplied key on every encrypt/decrypt call;
/// nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyMatrix {
    entries: [[i64; BLOCK_SIZE]; BLOCK_SIZE],
}

impl KeyMatrix {
    /// Builds the key matrix from a key string, row-major.
    ///
    /// # Parameters
    /// - `key`: The key, exactly [`KEY_LENGTH`] alphabet characters.
    ///
    /// # Errors
    /// - [`HillCipherError::InvalidKeyLength`] if the key length differs
    ///   from [`KEY_LENGTH`]. Checked before any character validation.
    /// - [`HillCipherError::InvalidCharacter`] if a key character lies
    ///   outside the alphabet.
    pub(crate) fn from_key(key: &str) -> Result<Self, HillCipherError> {
        let length = key.chars().count();
        if length != KEY_LENGTH {
            return Err(HillCipherError::InvalidKeyLength(length));
        }

        let mut entries = [[0i64; BLOCK_SIZE]; BLOCK_SIZE];
        for (index, symbol) in key.chars().enumerate() {
            entries[index / BLOCK_SIZE][index % BLOCK_SIZE] = alphabet::encode(symbol)?;
        }
        Ok(KeyMatrix { entries })
    }

    /// Returns the entry at `(row, col)`.
    pub(crate) fn get(&self, row: usize, col: usize) -> i64 {
        self.entries[row][col]
    }

    /// Determinant reduced into `[0, 94]`.
    fn determinant(&self) -> i64 {
        let [[a, b], [c, d]] = self.entries;
        modmath::modulo(a * d - b * c)
    }

    /// Computes the inverse key matrix via the adjugate method.
    ///
    /// The adjugate `[[d, -b], [-c, a]]` is reduced entry-wise into
    /// `[0, 94]`, scaled by the determinant's modular inverse, and reduced
    /// again.
    ///
    /// # Returns
    /// The inverse matrix, satisfying `self · inverse ≡ identity (mod 95)`.
    ///
    /// # Errors
    /// Returns [`HillCipherError::NoModularInverse`] if the determinant
    /// shares a factor with 95 = 5 · 19, in which case decryption is
    /// mathematically impossible with this key.
    pub(crate) fn invert(&self) -> Result<Self, HillCipherError> {
        let det_inv = modmath::modular_inverse(self.determinant())?;

        let [[a, b], [c, d]] = self.entries;
        let adjugate = [[d, -b], [-c, a]];

        let mut entries = [[0i64; BLOCK_SIZE]; BLOCK_SIZE];
        for row in 0..BLOCK_SIZE {
            for col in 0..BLOCK_SIZE {
                entries[row][col] =
                    modmath::modulo(modmath::modulo(adjugate[row][col]) * det_inv);
            }
        }
        Ok(KeyMatrix { entries })
    }
}
