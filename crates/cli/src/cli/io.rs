use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use base64::Engine;

use common::prelude::{CryptoError, FileStore, Key, KEY_SIZE};

/// Read the whole of `path`, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buff = Vec::new();
            io::stdin().lock().read_to_end(&mut buff)?;
            Ok(buff)
        }
    }
}

/// Write `bytes` to `path`, or stdout when no path is given
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, bytes),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()
        }
    }
}

/// Base64 encode sealed bytes, newline terminated
pub fn armor(bytes: &[u8]) -> Vec<u8> {
    let mut encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    encoded.push('\n');
    encoded.into_bytes()
}

/// Decode armored input, ignoring surrounding whitespace
pub fn dearmor(bytes: &[u8]) -> Result<Vec<u8>, base64::DecodeError> {
    let trimmed = bytes.trim_ascii();
    base64::engine::general_purpose::STANDARD.decode(trimmed)
}

/// Resolve a public key argument
///
/// A 64 character hex string (optionally `0x` prefixed) is taken as the key
/// itself. Anything else is a path to a raw key file.
pub fn resolve_key(arg: &str) -> Result<Key, CryptoError> {
    let trimmed = arg.strip_prefix("0x").unwrap_or(arg);
    if trimmed.len() == KEY_SIZE * 2 && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        return Key::from_hex(trimmed);
    }
    load_key(Path::new(arg))
}

/// Load a raw key file
pub fn load_key(path: &Path) -> Result<Key, CryptoError> {
    Key::load(&working_store(), &resource_name(path))
}

/// Write a raw key file
pub fn persist_key(key: &Key, path: &Path) -> Result<(), CryptoError> {
    key.persist(&working_store(), &resource_name(path))
}

/// Store resolving relative resource names against the working directory
pub fn working_store() -> FileStore {
    FileStore::new(".")
}

pub fn resource_name(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
