use std::path::PathBuf;

use clap::Args;
use common::prelude::{CryptoError, Pair};
use ezcrypt::state::StateError;
use rand::rngs::OsRng;

use crate::cli::io;

#[derive(Args, Debug, Clone)]
pub struct Generate {
    /// File for the public key (defaults to the local pair in the config directory)
    #[arg(long, requires = "private")]
    pub public: Option<PathBuf>,

    /// File for the private key (defaults to the local pair in the config directory)
    #[arg(long, requires = "public")]
    pub private: Option<PathBuf>,

    /// Overwrite existing key files
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum PairGenerateError {
    #[error("Refusing to overwrite {0} (use --force)")]
    Exists(PathBuf),
    #[error("Key error: {0}")]
    Crypto(#[from] CryptoError),
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl crate::cli::op::Op for Generate {
    type Error = PairGenerateError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let (store, public, private) = match (&self.public, &self.private) {
            (Some(public), Some(private)) => (
                io::working_store(),
                io::resource_name(public),
                io::resource_name(private),
            ),
            _ => {
                let state = ctx.state()?;
                (
                    state.store(),
                    state.config.public_key.clone(),
                    state.config.private_key.clone(),
                )
            }
        };

        if !self.force {
            for resource in [&public, &private] {
                let path = store.path(resource);
                if path.exists() {
                    return Err(PairGenerateError::Exists(path));
                }
            }
        }

        let pair = Pair::generate(&mut OsRng)?;
        pair.persist(&store, &public, &private)?;

        Ok(format!(
            "Wrote pair to {} and {}\nPublic key: {}",
            store.path(&public).display(),
            store.path(&private).display(),
            pair.public().to_hex()
        ))
    }
}
