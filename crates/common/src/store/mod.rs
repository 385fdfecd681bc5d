//! Named-resource storage for key material
//!
//! Keys are persisted through the small [`KeyStore`] capability rather than
//! straight to disk, so the same key lifecycle code works against the
//! filesystem ([`FileStore`]) or an in-process map ([`MemoryStore`]).
//!
//! A store knows nothing about keys; it moves opaque bytes under a resource
//! name. Length validation happens in [`crate::crypto::Key::load`].

mod fs;
mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur when reading, writing or removing a resource
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The resource does not exist
    #[error("resource not found: {resource}")]
    NotFound { resource: String },

    /// Any other I/O failure
    #[error("IO error on {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(resource: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return StoreError::NotFound {
                resource: resource.to_string(),
            };
        }
        StoreError::Io {
            resource: resource.to_string(),
            source,
        }
    }
}

/// Read/write/remove access to named resources
///
/// Writes replace any existing content. No locking is implied; callers
/// coordinate concurrent access to shared key material themselves.
pub trait KeyStore {
    /// Write `bytes` to `resource`, replacing what was there
    fn write(&self, resource: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Read the full contents of `resource`
    fn read(&self, resource: &str) -> Result<Vec<u8>, StoreError>;

    /// Remove `resource`
    fn remove(&self, resource: &str) -> Result<(), StoreError>;
}
