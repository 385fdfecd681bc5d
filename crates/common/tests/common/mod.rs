//! Shared test utilities for key persistence and cipher integration tests
#![allow(dead_code)]

use std::collections::HashSet;

use ::common::prelude::*;
use tempfile::TempDir;

pub const PUBLIC_FILE: &str = "public.key";
pub const PRIVATE_FILE: &str = "private.key";
pub const SECRET_FILE: &str = "secret.key";
pub const INVALID_FILE: &str = "invalid.key";

/// Install a test subscriber so library traces show up with `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Set up a file store rooted in a fresh temporary directory
pub fn setup_file_store() -> (FileStore, TempDir) {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path());
    (store, temp_dir)
}

/// A store that refuses to write a chosen set of resources
pub struct FailingStore<S> {
    pub inner: S,
    pub deny: HashSet<String>,
}

impl<S: KeyStore> FailingStore<S> {
    pub fn new(inner: S, deny: &[&str]) -> Self {
        Self {
            inner,
            deny: deny.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl<S: KeyStore> KeyStore for FailingStore<S> {
    fn write(&self, resource: &str, bytes: &[u8]) -> Result<(), StoreError> {
        if self.deny.contains(resource) {
            return Err(StoreError::Io {
                resource: resource.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            });
        }
        self.inner.write(resource, bytes)
    }

    fn read(&self, resource: &str) -> Result<Vec<u8>, StoreError> {
        self.inner.read(resource)
    }

    fn remove(&self, resource: &str) -> Result<(), StoreError> {
        self.inner.remove(resource)
    }
}

/// A random source that always errors
pub struct BrokenSource;

impl RandomSource for BrokenSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        Err(CryptoError::RandomReadFailed {
            wanted: dest.len(),
            source: anyhow::anyhow!("broken source"),
        })
    }
}
