use crate::store::StoreError;

/// Errors that can occur while handling keys or sealing and opening messages
///
/// Every variant is detected before any cryptographic work happens, except
/// [`CryptoError::DecryptionFailed`] and [`CryptoError::EncryptionFailed`],
/// which come from the primitive itself.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    // input validation
    #[error("message is empty")]
    EmptyMessage,
    #[error("message too short, expected at least {minimum} bytes, got {actual}")]
    MessageTooShort { minimum: usize, actual: usize },
    #[error("no key provided")]
    MissingKey,
    #[error("key has no data")]
    EmptyKeyData,
    #[error("invalid key length, expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),
    #[error("no key pair provided")]
    InvalidPair,
    #[error("key pair is missing its private key")]
    MissingPrivateKey,
    #[error("private key has no data")]
    EmptyPrivateKeyData,

    // randomness
    #[error("no random source")]
    NoRandomSource,
    #[error("failed to read {wanted} random bytes: {source}")]
    RandomReadFailed {
        wanted: usize,
        #[source]
        source: anyhow::Error,
    },

    // primitive
    #[error("decryption failed")]
    DecryptionFailed,
    #[error("encryption failed")]
    EncryptionFailed,

    // persistence
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
