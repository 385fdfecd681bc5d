use std::path::PathBuf;

use clap::Args;
use common::prelude::{CryptoError, Key};
use rand::rngs::OsRng;

use crate::cli::io;

#[derive(Args, Debug, Clone)]
pub struct Generate {
    /// File to write the raw key to
    #[arg(long)]
    pub out: PathBuf,

    /// Overwrite an existing key file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum KeyGenerateError {
    #[error("Refusing to overwrite {0} (use --force)")]
    Exists(PathBuf),
    #[error("Key error: {0}")]
    Crypto(#[from] CryptoError),
}

impl crate::cli::op::Op for Generate {
    type Error = KeyGenerateError;
    type Output = String;

    fn execute(&self, _ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        if self.out.exists() && !self.force {
            return Err(KeyGenerateError::Exists(self.out.clone()));
        }

        let key = Key::generate(&mut OsRng)?;
        io::persist_key(&key, &self.out)?;

        Ok(format!(
            "Wrote key {} to {}",
            key.fingerprint(),
            self.out.display()
        ))
    }
}
