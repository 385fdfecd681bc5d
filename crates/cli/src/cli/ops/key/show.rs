use std::path::PathBuf;

use clap::Args;
use common::prelude::CryptoError;

use crate::cli::io;

#[derive(Args, Debug, Clone)]
pub struct Show {
    /// Raw key file
    pub file: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum KeyShowError {
    #[error("Key error: {0}")]
    Crypto(#[from] CryptoError),
}

impl crate::cli::op::Op for Show {
    type Error = KeyShowError;
    type Output = String;

    fn execute(&self, _ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let key = io::load_key(&self.file)?;
        Ok(format!(
            "Key: {}\nFingerprint: {}",
            key.to_hex(),
            key.fingerprint()
        ))
    }
}
