use std::ops::Deref;

use super::{CryptoError, RandomSource};

/// Size of an XSalsa20 nonce in bytes
pub const NONCE_SIZE: usize = 24;

/// A per-message nonce
///
/// Nonces are built fresh for every seal or open and are never shared with
/// any other buffer. On seal the bytes come from a random source, on open
/// they are copied out of the front of the received message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Deref for Nonce {
    type Target = [u8; NONCE_SIZE];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[u8; NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; NONCE_SIZE]) -> Self {
        Nonce(bytes)
    }
}

impl Nonce {
    /// Draw a fresh nonce from `source`
    ///
    /// # Errors
    ///
    /// - [`CryptoError::NoRandomSource`] if no source is given
    /// - [`CryptoError::RandomReadFailed`] if the source cannot supply `NONCE_SIZE` bytes
    pub fn generate(source: Option<&mut dyn RandomSource>) -> Result<Self, CryptoError> {
        let source = source.ok_or(CryptoError::NoRandomSource)?;
        let mut buff = [0u8; NONCE_SIZE];
        source.fill(&mut buff)?;
        Ok(Self(buff))
    }

    /// Copy the nonce from the leading bytes of a sealed message
    ///
    /// Any bit pattern is accepted; authenticity is checked later by the
    /// primitive's tag.
    pub fn extract(message: &[u8]) -> Result<Self, CryptoError> {
        if message.len() < NONCE_SIZE {
            return Err(CryptoError::MessageTooShort {
                minimum: NONCE_SIZE,
                actual: message.len(),
            });
        }
        let mut buff = [0u8; NONCE_SIZE];
        buff.copy_from_slice(&message[..NONCE_SIZE]);
        Ok(Self(buff))
    }

    /// Get a reference to the nonce bytes
    pub fn bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}
