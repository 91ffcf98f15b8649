//! Hill cipher pipelines: block transform, encryption, and decryption.
//!
//! Each block, taken as a row vector, is multiplied by the key matrix
//! modulo 95. Decryption runs the same transform with the inverse key
//! matrix. Both pipelines are single-pass and side-effect-free; the key
//! schedule is rebuilt from the key string on every call.

use crate::alphabet;
use crate::block::{self, Block, BLOCK_SIZE};
use crate::error::HillCipherError;
use crate::key_matrix::KeyMatrix;
use crate::modmath;

/// Multiplies `input` (as a row vector) by `matrix` modulo 95.
///
/// Output index `i` accumulates `input[j] · matrix[j][i]`. The row-vector
/// index order must match between encryption and decryption or
/// round-tripping breaks.
fn transform(input: &Block, matrix: &KeyMatrix) -> Block {
    let mut output = [0i64; BLOCK_SIZE];
    for (i, out) in output.iter_mut().enumerate() {
        let mut sum = 0i64;
        for (j, &code) in input.iter().enumerate() {
            sum += code * matrix.get(j, i);
        }
        *out = modmath::modulo(sum);
    }
    output
}

/// Encrypts `plaintext` with a 4-character `key`.
///
/// Odd-length plaintext is right-padded with one space symbol before
/// encryption, so the ciphertext for it is one symbol longer than the
/// input. Ciphertext consists solely of the 95 printable alphabet
/// symbols and is safe for text-only storage and transports.
///
/// # Parameters
/// - `plaintext`: The text to encrypt; every character must belong to the
///   printable alphabet.
/// - `key`: The cipher key, exactly 4 alphabet characters.
///
/// # Returns
/// The ciphertext string.
///
/// # Errors
/// - [`HillCipherError::InvalidKeyLength`] if the key is not exactly
///   4 characters long.
/// - [`HillCipherError::InvalidCharacter`] if any character of `key` or
///   `plaintext` lies outside the alphabet.
///
/// # Examples
///
/// ```
/// use hillcipher::encrypt;
///
/// let ciphertext = encrypt("attack at dawn", "Key!").unwrap();
/// assert_eq!(ciphertext.len(), 14);
/// assert_ne!(ciphertext, "attack at dawn");
/// ```
///
/// ```
/// use hillcipher::encrypt;
///
/// assert!(encrypt("café", "Key!").is_err());
/// assert!(encrypt("attack at dawn", "too long key").is_err());
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, HillCipherError> {
    let key_matrix = KeyMatrix::from_key(key)?;
    let (blocks, padded) = block::to_blocks(plaintext)?;

    let mut ciphertext = String::with_capacity(padded.len());
    for input in &blocks {
        for code in transform(input, &key_matrix) {
            ciphertext.push(alphabet::decode(code));
        }
    }
    Ok(ciphertext)
}

/// Decrypts `ciphertext` with the 4-character `key` used to encrypt it.
///
/// Ciphertext produced by [`encrypt`] always has even length; if a
/// malformed odd-length ciphertext is supplied, the trailing unpaired
/// symbol is silently dropped rather than rejected.
///
/// # Parameters
/// - `ciphertext`: The text to decrypt; every character must belong to the
///   printable alphabet.
/// - `key`: The cipher key, exactly 4 alphabet characters.
///
/// # Returns
/// The recovered plaintext, including the padding space when the original
/// plaintext had odd length.
///
/// # Errors
/// - [`HillCipherError::InvalidKeyLength`] if the key is not exactly
///   4 characters long.
/// - [`HillCipherError::InvalidCharacter`] if any character of `key` or
///   `ciphertext` lies outside the alphabet.
/// - [`HillCipherError::NoModularInverse`] if the key matrix determinant
///   shares a factor with 95, making the key undecryptable.
///
/// # Examples
///
/// ```
/// use hillcipher::{decrypt, encrypt};
///
/// let ciphertext = encrypt("ABC", "HILL").unwrap();
/// assert_eq!(decrypt(&ciphertext, "HILL").unwrap(), "ABC ");
/// ```
///
/// ```
/// use hillcipher::{decrypt, encrypt};
///
/// // "TEST" has determinant 57 = 3·19: encryption works, decryption cannot.
/// let ciphertext = encrypt("ABC", "TEST").unwrap();
/// assert!(decrypt(&ciphertext, "TEST").is_err());
/// ```
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, HillCipherError> {
    let inverse = KeyMatrix::from_key(key)?.invert()?;

    let mut codes = Vec::with_capacity(ciphertext.len());
    for symbol in ciphertext.chars() {
        codes.push(alphabet::encode(symbol)?);
    }

    let mut plaintext = String::with_capacity(codes.len());
    for chunk in codes.chunks_exact(BLOCK_SIZE) {
        let mut input = [0i64; BLOCK_SIZE];
        input.copy_from_slice(chunk);
        for code in transform(&input, &inverse) {
            plaintext.push(alphabet::decode(code));
        }
    }
    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_known_block() {
        // "AB" = [33, 34] against the "HILL" matrix [[40, 41], [44, 44]]:
        // out[0] = 33·40 + 34·44 = 2816 ≡ 61, out[1] = 33·41 + 34·44 = 2849 ≡ 94
        let matrix = KeyMatrix::from_key("HILL").unwrap();
        assert_eq!(transform(&[33, 34], &matrix), [61, 94]);
    }

    #[test]
    fn test_transform_row_vector_convention() {
        // The block multiplies the matrix from the left: with a non-symmetric
        // matrix, swapping the convention changes the result.
        let matrix = KeyMatrix::from_key("HILL").unwrap();
        let row_vector = transform(&[1, 0], &matrix);
        assert_eq!(row_vector, [40, 41], "expected the first matrix row");
    }

    #[test]
    fn test_encrypt_known_vector() {
        assert_eq!(encrypt("Hello, World!", "HILL").unwrap(), "l53 n^MM7'O<HI");
    }

    #[test]
    fn test_encrypt_empty_plaintext() {
        assert_eq!(encrypt("", "HILL").unwrap(), "");
    }

    #[test]
    fn test_decrypt_empty_ciphertext() {
        assert_eq!(decrypt("", "HILL").unwrap(), "");
    }

    #[test]
    fn test_encrypt_succeeds_with_non_invertible_key() {
        // The inverse is only computed on decrypt.
        assert_eq!(encrypt("ABC", "TEST").unwrap(), ">L/\\");
    }

    #[test]
    fn test_decrypt_fails_with_non_invertible_key() {
        assert_eq!(
            decrypt(">L/\\", "TEST"),
            Err(HillCipherError::NoModularInverse(57))
        );
    }

    #[test]
    fn test_decrypt_drops_trailing_unpaired_symbol() {
        let ciphertext = encrypt("ABCD", "HILL").unwrap();
        assert_eq!(ciphertext, "]~Gj");
        // Truncated ciphertext: the leftover third symbol is dropped.
        assert_eq!(decrypt(&ciphertext[..3], "HILL").unwrap(), "AB");
        assert_eq!(decrypt("X", "HILL").unwrap(), "");
    }

    #[test]
    fn test_roundtrip_even_length() {
        let plaintext = "attack at dawn";
        let ciphertext = encrypt(plaintext, "Key!").unwrap();
        assert_eq!(decrypt(&ciphertext, "Key!").unwrap(), plaintext);
    }

    #[test]
    fn test_roundtrip_odd_length_gains_padding_space() {
        let ciphertext = encrypt("ABC", "HILL").unwrap();
        assert_eq!(ciphertext, "]~f*");
        assert_eq!(decrypt(&ciphertext, "HILL").unwrap(), "ABC ");
    }

    #[test]
    fn test_error_order_key_before_plaintext() {
        // Both the key and the plaintext are invalid: the key gate fires
        // first because the key matrix is built before blocking.
        assert_eq!(
            encrypt("café", "bad"),
            Err(HillCipherError::InvalidKeyLength(3))
        );
        assert_eq!(
            decrypt("café", "bad"),
            Err(HillCipherError::InvalidKeyLength(3))
        );
    }

    #[test]
    fn test_invalid_plaintext_character() {
        assert_eq!(
            encrypt("café", "HILL"),
            Err(HillCipherError::InvalidCharacter('é'))
        );
    }

    #[test]
    fn test_invalid_ciphertext_character() {
        assert_eq!(
            decrypt("ab\u{7f}d", "HILL"),
            Err(HillCipherError::InvalidCharacter('\u{7f}'))
        );
    }
}
