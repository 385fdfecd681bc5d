use std::collections::HashMap;

use parking_lot::Mutex;

use super::{KeyStore, StoreError};

/// In-memory key store
///
/// Useful for tests and for embedding keys without touching disk. Safe to
/// share between threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    resources: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.resources.lock().contains_key(resource)
    }

    pub fn len(&self) -> usize {
        self.resources.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.lock().is_empty()
    }
}

impl KeyStore for MemoryStore {
    fn write(&self, resource: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.resources
            .lock()
            .insert(resource.to_string(), bytes.to_vec());
        Ok(())
    }

    fn read(&self, resource: &str) -> Result<Vec<u8>, StoreError> {
        self.resources
            .lock()
            .get(resource)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                resource: resource.to_string(),
            })
    }

    fn remove(&self, resource: &str) -> Result<(), StoreError> {
        self.resources
            .lock()
            .remove(resource)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                resource: resource.to_string(),
            })
    }
}
