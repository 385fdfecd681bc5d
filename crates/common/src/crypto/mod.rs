//! Authenticated encryption on top of NaCl primitives
//!
//! This module is a thin protocol layer around two audited primitives:
//!
//! - **secretbox** (XSalsa20 + Poly1305): symmetric sealing with a single shared [`Key`]
//! - **box** (X25519 + XSalsa20 + Poly1305): asymmetric sealing between two [`Pair`]s
//!
//! The primitives do the cipher math. This layer owns everything around them:
//! nonce generation and extraction, input validation, and the message layout.
//!
//! # Message Layout
//!
//! Both cipher families produce the same wire format:
//!
//! ```text
//! [ nonce: 24 bytes ][ sealed payload: plaintext_len + 16 bytes ]
//! ```
//!
//! The nonce is sent in the clear and a fresh one is drawn for every seal.
//! There is no version byte and no key identifier, so picking the right key
//! to open a message is entirely up to the caller.
//!
//! # Validation Order
//!
//! Every seal and open runs its structural checks (message length, key and
//! pair shape, randomness source presence) before a nonce is drawn or a
//! primitive is called. Authentication failures are reported as a single
//! [`CryptoError::DecryptionFailed`] no matter what went wrong.

pub mod asymmetric;
mod error;
mod keys;
mod nonce;
mod random;
pub mod symmetric;
mod validate;

pub use error::CryptoError;
pub use keys::{Key, Pair, KEY_SIZE};
pub use nonce::{Nonce, NONCE_SIZE};
pub use random::{RandomSource, ReaderSource};

/// Bytes added by the Poly1305 authenticator to every sealed payload
pub const OVERHEAD: usize = 16;
/// Smallest ciphertext that can carry at least one byte of plaintext
pub const MIN_CIPHERTEXT_SIZE: usize = NONCE_SIZE + OVERHEAD + 1;
