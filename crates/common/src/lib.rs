/**
 * Cryptographic types and operations.
 *  - Symmetric keys and public/private pairs
 *  - Nonce management and the sealed message layout
 *  - Seal/open over NaCl secretbox and box
 */
pub mod crypto;
/**
 * Named-resource persistence for key material.
 * A tiny read/write/remove capability with a
 *  filesystem backend and an in-memory one.
 */
pub mod store;

pub mod prelude {
    pub use crate::crypto::{
        asymmetric, symmetric, CryptoError, Key, Nonce, Pair, RandomSource, ReaderSource,
        KEY_SIZE, MIN_CIPHERTEXT_SIZE, NONCE_SIZE, OVERHEAD,
    };
    pub use crate::store::{FileStore, KeyStore, MemoryStore, StoreError};
}
