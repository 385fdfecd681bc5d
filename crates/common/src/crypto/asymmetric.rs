//! Asymmetric sealing with X25519-XSalsa20-Poly1305 (NaCl box)
//!
//! The sender seals with its own private key and the recipient's public key;
//! the recipient opens with its own private key and the sender's public key.
//! Both sides derive the same shared secret, so the message is authenticated
//! as coming from the holder of the sender's private key.
//!
//! The wire layout is the same as [`super::symmetric`]:
//!
//! ```text
//! [ nonce: 24 bytes ][ box(plaintext): plaintext_len + 16 bytes ]
//! ```

use crypto_box::aead::Aead;
use crypto_box::{PublicKey as BoxPublicKey, SalsaBox, SecretKey as BoxSecretKey};

use super::validate::{check_ciphertext, check_key, check_message, check_pair};
use super::{CryptoError, Key, Nonce, Pair, RandomSource, NONCE_SIZE};

fn salsa_box(public: &Key, private: &Key) -> SalsaBox {
    let public = BoxPublicKey::from(**public);
    let private = BoxSecretKey::from(**private);
    SalsaBox::new(&public, &private)
}

/// Seal `plaintext` for `recipient` using `sender`'s private key
///
/// # Errors
///
/// Checked in this order, before any random bytes are drawn:
/// - [`CryptoError::EmptyMessage`]
/// - [`CryptoError::MissingKey`] for an absent recipient key
/// - [`CryptoError::InvalidPair`] / [`CryptoError::MissingPrivateKey`] for the sender pair
/// - [`CryptoError::NoRandomSource`]
///
/// Then [`CryptoError::RandomReadFailed`] if the nonce cannot be drawn.
pub fn seal(
    plaintext: &[u8],
    recipient: Option<&Key>,
    sender: Option<&Pair>,
    source: Option<&mut dyn RandomSource>,
) -> Result<Vec<u8>, CryptoError> {
    check_message(plaintext)?;
    let recipient = check_key(recipient)?;
    let private = check_pair(sender)?;
    let source = source.ok_or(CryptoError::NoRandomSource)?;

    let nonce = Nonce::generate(Some(source))?;

    let sealed = salsa_box(recipient, private)
        .encrypt(nonce.bytes().into(), plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    let mut out = Vec::with_capacity(NONCE_SIZE + sealed.len());
    out.extend_from_slice(nonce.bytes());
    out.extend_from_slice(&sealed);

    tracing::trace!(
        recipient = %recipient.fingerprint(),
        plaintext_len = plaintext.len(),
        "sealed message"
    );
    Ok(out)
}

/// Open a message `sender` sealed for `recipient`
///
/// # Errors
///
/// - [`CryptoError::MessageTooShort`]
/// - [`CryptoError::MissingKey`] for an absent sender key
/// - [`CryptoError::InvalidPair`] / [`CryptoError::MissingPrivateKey`] for the recipient pair
/// - [`CryptoError::DecryptionFailed`] for wrong keys, mismatched pairs or tampering
pub fn open(
    ciphertext: &[u8],
    sender: Option<&Key>,
    recipient: Option<&Pair>,
) -> Result<Vec<u8>, CryptoError> {
    check_ciphertext(ciphertext)?;
    let sender = check_key(sender)?;
    let private = check_pair(recipient)?;

    let nonce = Nonce::extract(ciphertext)?;

    salsa_box(sender, private)
        .decrypt(nonce.bytes().into(), &ciphertext[NONCE_SIZE..])
        .map_err(|_| CryptoError::DecryptionFailed)
}
