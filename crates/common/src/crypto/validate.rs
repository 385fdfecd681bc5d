//! Structural checks shared by both ciphers. None of these touch a primitive.

use super::{CryptoError, Key, Pair, MIN_CIPHERTEXT_SIZE};

pub(crate) fn check_message(message: &[u8]) -> Result<(), CryptoError> {
    if message.is_empty() {
        return Err(CryptoError::EmptyMessage);
    }
    Ok(())
}

pub(crate) fn check_ciphertext(ciphertext: &[u8]) -> Result<(), CryptoError> {
    if ciphertext.len() < MIN_CIPHERTEXT_SIZE {
        return Err(CryptoError::MessageTooShort {
            minimum: MIN_CIPHERTEXT_SIZE,
            actual: ciphertext.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_key(key: Option<&Key>) -> Result<&Key, CryptoError> {
    key.ok_or(CryptoError::MissingKey)
}

/// Returns the pair's private half once the pair is known to be usable
pub(crate) fn check_pair(pair: Option<&Pair>) -> Result<&Key, CryptoError> {
    let pair = pair.ok_or(CryptoError::InvalidPair)?;
    pair.private().ok_or(CryptoError::MissingPrivateKey)
}
