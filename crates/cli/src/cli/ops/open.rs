use std::path::PathBuf;

use clap::Args;
use common::prelude::CryptoError;
use ezcrypt::state::StateError;

use crate::cli::io;

#[derive(Args, Debug, Clone)]
pub struct Open {
    /// Symmetric key file (or use --from)
    #[arg(long, group = "open_key")]
    pub key: Option<PathBuf>,

    /// Sender public key, as hex or a key file (or use --key)
    #[arg(long, group = "open_key")]
    pub from: Option<String>,

    /// Read the sealed message from this file instead of stdin
    #[arg(long = "in")]
    pub input: Option<PathBuf>,

    /// Write the opened message to this file instead of stdout
    #[arg(long = "out")]
    pub output: Option<PathBuf>,

    /// Base64 decode the sealed message first
    #[arg(long)]
    pub armor: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("Either --key or --from must be provided")]
    NoKey,
    #[error("Open failed: {0}")]
    Crypto(#[from] CryptoError),
    #[error("State error: {0}")]
    State(#[from] StateError),
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl crate::cli::op::Op for Open {
    type Error = OpenError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        if self.key.is_none() && self.from.is_none() {
            return Err(OpenError::NoKey);
        }

        let input = io::read_input(self.input.as_deref())?;

        let plaintext = if let Some(ref path) = self.key {
            let key = io::load_key(path)?;
            let armor = self.armor || ctx.config_armor()?;
            let sealed = if armor { io::dearmor(&input)? } else { input };
            key.open(&sealed)?
        } else if let Some(ref from) = self.from {
            let sender = io::resolve_key(from)?;
            let state = ctx.state()?;
            let pair = state.load_pair()?;
            let sealed = if self.armor || state.config.armor {
                io::dearmor(&input)?
            } else {
                input
            };
            tracing::debug!(
                sender = %sender.fingerprint(),
                recipient = %pair.public().fingerprint(),
                "opening from sender"
            );
            pair.open_from(&sender, &sealed)?
        } else {
            return Err(OpenError::NoKey);
        };

        io::write_output(self.output.as_deref(), &plaintext)?;

        Ok(match self.output {
            Some(ref path) => format!("Opened {} bytes to {}", plaintext.len(), path.display()),
            None => String::new(),
        })
    }
}
