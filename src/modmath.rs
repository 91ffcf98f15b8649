//! Modular arithmetic over the cipher ring.
//!
//! The modulus is fixed at 95 by the alphabet size. The inverse search is
//! a linear scan, at most 94 multiplications per call; a generalization to
//! larger moduli would switch to the extended Euclidean algorithm.

use crate::alphabet::ALPHABET_SIZE;
use crate::error::HillCipherError;

/// Reduces `n` into `[0, 94]` using true mathematical modulo.
///
/// Rust's `%` keeps the sign of the dividend, and the adjugate entries
/// `-b` and `-c` are negative, so the modulus is added back before the
/// second reduction.
pub(crate) fn modulo(n: i64) -> i64 {
    ((n % ALPHABET_SIZE) + ALPHABET_SIZE) % ALPHABET_SIZE
}

/// Finds the multiplicative inverse of `a` modulo 95.
///
/// Scans `x` over `1..95` and returns the first `x` with
/// `(a · x) mod 95 == 1`.
///
/// # Parameters
/// - `a`: The value to invert; reduced into `[0, 94]` first.
///
/// # Returns
/// The inverse `x`, satisfying `(a · x) mod 95 == 1`.
///
/// # Errors
/// Returns [`HillCipherError::NoModularInverse`] when the scan is
/// exhausted, i.e. when `a` shares a factor with 95 = 5 · 19
/// (including `a == 0`).
pub(crate) fn modular_inverse(a: i64) -> Result<i64, HillCipherError> {
    let a = modulo(a);
    for x in 1..ALPHABET_SIZE {
        if modulo(a * x) == 1 {
            return Ok(x);
        }
    }
    Err(HillCipherError::NoModularInverse(a))
}
