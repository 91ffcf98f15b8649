//! Hill cipher over the 95 printable ASCII characters.
//!
//! A classical block-substitution cipher operating on the ring Z/95. Text
//! is encoded as integers 0..=94 (space through tilde), split into
//! 2-symbol blocks, and each block is multiplied modulo 95 by a 2×2 key
//! matrix built from a 4-character key. Decryption multiplies by the
//! inverse key matrix, which exists only when the key's determinant is
//! coprime to 95.
//!
//! Both operations are stateless pure functions: the key schedule is
//! rebuilt on every call, nothing is shared between calls, and any number
//! of callers may encrypt and decrypt concurrently without coordination.
//! Ciphertext is built from the same printable alphabet as plaintext, so
//! it round-trips through text columns and text wire payloads unchanged.
//!
//! This is **not** a secure cipher: a 2×2 linear substitution falls to a
//! known-plaintext attack with a handful of blocks. It is a deterministic,
//! invertible text transform, nothing more.
//!
//! # Architecture
//!
//! ```text
//! alphabet    (leaf — symbol ↔ code bijection over the 95 printable characters)
//!     ↑
//! block       (splits text into 2-symbol blocks, right-pads odd-length input)
//!     ↑
//! key_matrix  (4 key symbols → 2×2 matrix over Z/95; adjugate inverse)
//!     ↑
//! hill_cipher (row vector × matrix mod 95 per block; encrypt / decrypt)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use hillcipher::{decrypt, encrypt};
//!
//! let ciphertext = encrypt("attack at dawn", "Key!").unwrap();
//! assert_ne!(ciphertext, "attack at dawn");
//!
//! let plaintext = decrypt(&ciphertext, "Key!").unwrap();
//! assert_eq!(plaintext, "attack at dawn");
//! ```
//!
//! Odd-length plaintext is padded with one trailing space, which survives
//! the round trip:
//!
//! ```
//! use hillcipher::{decrypt, encrypt};
//!
//! let ciphertext = encrypt("ABC", "HILL").unwrap();
//! assert_eq!(ciphertext.len(), 4);
//! assert_eq!(decrypt(&ciphertext, "HILL").unwrap(), "ABC ");
//! ```
//!
//! A typical caller encrypts each message with one fixed key and decrypts
//! whole conversations in a loop:
//!
//! ```
//! use hillcipher::{decrypt, encrypt};
//!
//! let key = "k3y!";
//! let messages = ["hi there", "on my way!", "see you at 7"];
//! let stored: Vec<String> = messages
//!     .iter()
//!     .map(|msg| encrypt(msg, key).unwrap())
//!     .collect();
//!
//! for (ciphertext, original) in stored.iter().zip(messages) {
//!     assert_eq!(decrypt(ciphertext, key).unwrap(), original);
//! }
//! ```

#![deny(clippy::all)]

pub mod error;

pub(crate) mod alphabet;
pub(crate) mod block;
mod hill_cipher;
pub(crate) mod key_matrix;
pub(crate) mod modmath;

pub use hill_cipher::{decrypt, encrypt};
