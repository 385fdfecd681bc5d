//! Symmetric sealing with XSalsa20-Poly1305 (NaCl secretbox)
//!
//! Both parties share a single [`Key`]. Every call is a stateless transform;
//! the only thing carried between seal and open is the message itself.
//!
//! ```text
//! [ nonce: 24 bytes ][ secretbox(plaintext): plaintext_len + 16 bytes ]
//! ```

use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::XSalsa20Poly1305;

use super::validate::{check_ciphertext, check_key, check_message};
use super::{CryptoError, Key, Nonce, RandomSource, NONCE_SIZE};

/// Seal `plaintext` under the shared `key`
///
/// A fresh nonce is drawn from `source` and prepended, unencrypted, to the
/// sealed payload.
///
/// # Errors
///
/// Checked in this order, before any random bytes are drawn:
/// - [`CryptoError::EmptyMessage`] if `plaintext` is empty
/// - [`CryptoError::MissingKey`] for an absent key
/// - [`CryptoError::NoRandomSource`] if no source is given
///
/// Then [`CryptoError::RandomReadFailed`] if the nonce cannot be drawn.
pub fn seal(
    plaintext: &[u8],
    key: Option<&Key>,
    source: Option<&mut dyn RandomSource>,
) -> Result<Vec<u8>, CryptoError> {
    check_message(plaintext)?;
    let key = check_key(key)?;
    let source = source.ok_or(CryptoError::NoRandomSource)?;

    let nonce = Nonce::generate(Some(source))?;

    let cipher = XSalsa20Poly1305::new(key.bytes().into());
    let sealed = cipher
        .encrypt(nonce.bytes().into(), plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    let mut out = Vec::with_capacity(NONCE_SIZE + sealed.len());
    out.extend_from_slice(nonce.bytes());
    out.extend_from_slice(&sealed);

    tracing::trace!(plaintext_len = plaintext.len(), "sealed message");
    Ok(out)
}

/// Open a message produced by [`seal`]
///
/// # Errors
///
/// - [`CryptoError::MessageTooShort`] if the message cannot hold a nonce, a tag and one byte
/// - [`CryptoError::MissingKey`] for an absent key
/// - [`CryptoError::DecryptionFailed`] for a wrong key or any tampering. The cause is
///   deliberately not reported.
pub fn open(ciphertext: &[u8], key: Option<&Key>) -> Result<Vec<u8>, CryptoError> {
    check_ciphertext(ciphertext)?;
    let key = check_key(key)?;

    let nonce = Nonce::extract(ciphertext)?;

    let cipher = XSalsa20Poly1305::new(key.bytes().into());
    cipher
        .decrypt(nonce.bytes().into(), &ciphertext[NONCE_SIZE..])
        .map_err(|_| CryptoError::DecryptionFailed)
}
