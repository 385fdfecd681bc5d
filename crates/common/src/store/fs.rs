use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{KeyStore, StoreError};

/// Filesystem-backed key store
///
/// Resource names are paths resolved against `root`; absolute names are used
/// as-is. Files are created with mode `0600` on Unix since they usually hold
/// private key material. Parent directories are not created.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a resource name to the path it is stored at
    pub fn path(&self, resource: &str) -> PathBuf {
        self.root.join(resource)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(unix)]
fn open_for_write(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

impl KeyStore for FileStore {
    fn write(&self, resource: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path(resource);
        let mut file = open_for_write(&path).map_err(|e| StoreError::io(resource, e))?;
        file.write_all(bytes)
            .and_then(|_| file.sync_all())
            .map_err(|e| StoreError::io(resource, e))?;
        tracing::trace!(path = %path.display(), len = bytes.len(), "wrote resource");
        Ok(())
    }

    fn read(&self, resource: &str) -> Result<Vec<u8>, StoreError> {
        fs::read(self.path(resource)).map_err(|e| StoreError::io(resource, e))
    }

    fn remove(&self, resource: &str) -> Result<(), StoreError> {
        fs::remove_file(self.path(resource)).map_err(|e| StoreError::io(resource, e))
    }
}
