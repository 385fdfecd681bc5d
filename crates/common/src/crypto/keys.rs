use std::fmt;
use std::ops::Deref;

use crypto_box::SecretKey as BoxSecretKey;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{asymmetric, symmetric, CryptoError, RandomSource};
use crate::store::KeyStore;

/// Size of a secretbox key, X25519 public key or X25519 private key in bytes
pub const KEY_SIZE: usize = 32;
/// Number of BLAKE3 bytes shown in a key fingerprint
const FINGERPRINT_SIZE: usize = 8;

/// Opaque 256-bit key material
///
/// A `Key` is either a symmetric secretbox key or one half of a [`Pair`].
/// Its length is fixed by the type, so every constructed `Key` is the right
/// size and any 32 bytes, all-zero included, make a usable key. Material with
/// no data at all is refused where keys are built ([`Key::from_bytes`],
/// [`Key::load`]) with [`CryptoError::EmptyKeyData`].
///
/// The bytes are wiped on drop and `Debug` only prints a fingerprint.
///
/// # Persistence
///
/// Keys are persisted as exactly `KEY_SIZE` raw bytes with no header.
///
/// # Examples
///
/// ```ignore
/// let key = Key::generate(&mut OsRng)?;
/// key.persist(&store, "secret.key")?;
///
/// let sealed = key.seal(b"hello", &mut OsRng)?;
/// let loaded = Key::load(&store, "secret.key")?;
/// assert_eq!(loaded.open(&sealed)?, b"hello");
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_SIZE]);

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.fingerprint()).finish()
    }
}

impl Deref for Key {
    type Target = [u8; KEY_SIZE];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Key(bytes)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = CryptoError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl Key {
    /// Generate a new random key from `source`
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::RandomReadFailed`] if the source cannot supply
    /// `KEY_SIZE` bytes.
    pub fn generate(source: &mut dyn RandomSource) -> Result<Self, CryptoError> {
        let mut buff = [0u8; KEY_SIZE];
        source.fill(&mut buff)?;
        Ok(Self(buff))
    }

    /// Create a key from a byte slice
    ///
    /// The bytes are copied, never borrowed.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::EmptyKeyData`] if the slice is empty
    /// - [`CryptoError::InvalidKeyLength`] unless the slice is exactly `KEY_SIZE` bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, CryptoError> {
        if data.is_empty() {
            return Err(CryptoError::EmptyKeyData);
        }
        if data.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: data.len(),
            });
        }
        let mut buff = [0u8; KEY_SIZE];
        buff.copy_from_slice(data);
        Ok(Self(buff))
    }

    /// Parse a key from a hexadecimal string
    ///
    /// Accepts both plain hex and "0x"-prefixed hex strings.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex).map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Get a reference to the key bytes
    pub fn bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Convert key to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short, stable identifier for displaying a key
    ///
    /// The first bytes of the BLAKE3 hash of the key, hex encoded. Safe to
    /// log for public keys; it does not reveal the key itself.
    pub fn fingerprint(&self) -> String {
        let hash = blake3::hash(&self.0);
        hex::encode(&hash.as_bytes()[..FINGERPRINT_SIZE])
    }

    /// Persist the raw key bytes to `resource`
    pub fn persist<S>(&self, store: &S, resource: &str) -> Result<(), CryptoError>
    where
        S: KeyStore + ?Sized,
    {
        store.write(resource, self.bytes())?;
        tracing::debug!(resource, "persisted key");
        Ok(())
    }

    /// Load a key previously written with [`Key::persist`]
    ///
    /// # Errors
    ///
    /// - [`CryptoError::Store`] if the resource cannot be read
    /// - [`CryptoError::EmptyKeyData`] if the resource is empty
    /// - [`CryptoError::InvalidKeyLength`] if it does not hold exactly `KEY_SIZE` bytes
    pub fn load<S>(store: &S, resource: &str) -> Result<Self, CryptoError>
    where
        S: KeyStore + ?Sized,
    {
        let mut data = store.read(resource)?;
        let key = Self::from_bytes(&data);
        data.zeroize();
        let key = key?;
        tracing::debug!(resource, "loaded key");
        Ok(key)
    }

    /// Seal `plaintext` with this key as a shared secret
    ///
    /// See [`symmetric::seal`].
    pub fn seal(
        &self,
        plaintext: &[u8],
        source: &mut dyn RandomSource,
    ) -> Result<Vec<u8>, CryptoError> {
        symmetric::seal(plaintext, Some(self), Some(source))
    }

    /// Open a message sealed with [`Key::seal`]
    ///
    /// See [`symmetric::open`].
    pub fn open(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        symmetric::open(ciphertext, Some(self))
    }
}

/// A public/private key pair for box encryption
///
/// The private half is optional: a pair built from someone else's public key
/// ([`Pair::from_public`]) can name a peer but cannot seal or open anything.
/// Neither constructor checks that the halves belong together; that is on
/// the caller.
///
/// # Examples
///
/// ```ignore
/// let alice = Pair::generate(&mut OsRng)?;
/// let bob = Pair::generate(&mut OsRng)?;
///
/// let sealed = alice.seal_for(bob.public(), b"hi bob", &mut OsRng)?;
/// let opened = bob.open_from(alice.public(), &sealed)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    public: Key,
    private: Option<Key>,
}

impl Pair {
    /// Generate a new random pair
    ///
    /// The private half is read from `source` and the public half is derived
    /// from it by the X25519 primitive.
    pub fn generate(source: &mut dyn RandomSource) -> Result<Self, CryptoError> {
        let private = Key::generate(source)?;
        let secret = BoxSecretKey::from(*private);
        let public = Key::from(*secret.public_key().as_bytes());
        Ok(Self {
            public,
            private: Some(private),
        })
    }

    /// Build a pair from two known halves
    pub fn from_keys(public: Key, private: Key) -> Self {
        Self {
            public,
            private: Some(private),
        }
    }

    /// Build a pair that only knows its public half
    pub fn from_public(public: Key) -> Self {
        Self {
            public,
            private: None,
        }
    }

    /// Load both halves from `store`
    ///
    /// The halves are loaded independently and are not checked against each
    /// other. An empty private resource fails with
    /// [`CryptoError::EmptyPrivateKeyData`].
    pub fn load<S>(store: &S, public: &str, private: &str) -> Result<Self, CryptoError>
    where
        S: KeyStore + ?Sized,
    {
        let public = Key::load(store, public)?;
        let private = Key::load(store, private).map_err(|e| match e {
            CryptoError::EmptyKeyData => CryptoError::EmptyPrivateKeyData,
            e => e,
        })?;
        Ok(Self::from_keys(public, private))
    }

    /// Persist both halves to `store`
    ///
    /// The public half is written first. If writing the private half then
    /// fails, the public resource is removed again so no unmatched public key
    /// is left behind, and the private write error is returned.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::MissingPrivateKey`] for a public-only pair, before anything is written
    /// - [`CryptoError::Store`] if either write fails
    pub fn persist<S>(&self, store: &S, public: &str, private: &str) -> Result<(), CryptoError>
    where
        S: KeyStore + ?Sized,
    {
        let private_key = self.private.as_ref().ok_or(CryptoError::MissingPrivateKey)?;

        self.public.persist(store, public)?;

        if let Err(err) = private_key.persist(store, private) {
            if let Err(rollback) = store.remove(public) {
                tracing::warn!(
                    resource = public,
                    error = %rollback,
                    "failed to remove public key after private key write failed"
                );
            }
            return Err(err);
        }

        Ok(())
    }

    /// The public half
    pub fn public(&self) -> &Key {
        &self.public
    }

    /// The private half, if this pair has one
    pub fn private(&self) -> Option<&Key> {
        self.private.as_ref()
    }

    /// Seal `plaintext` for `recipient` with this pair as the sender
    ///
    /// See [`asymmetric::seal`].
    pub fn seal_for(
        &self,
        recipient: &Key,
        plaintext: &[u8],
        source: &mut dyn RandomSource,
    ) -> Result<Vec<u8>, CryptoError> {
        asymmetric::seal(plaintext, Some(recipient), Some(self), Some(source))
    }

    /// Open a message `sender` sealed for this pair
    ///
    /// See [`asymmetric::open`].
    pub fn open_from(&self, sender: &Key, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        asymmetric::open(ciphertext, Some(sender), Some(self))
    }
}
