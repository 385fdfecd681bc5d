use std::path::PathBuf;

use clap::Args;
use common::prelude::CryptoError;
use ezcrypt::state::StateError;
use rand::rngs::OsRng;

use crate::cli::io;

#[derive(Args, Debug, Clone)]
pub struct Seal {
    /// Symmetric key file (or use --to)
    #[arg(long, group = "seal_key")]
    pub key: Option<PathBuf>,

    /// Recipient public key, as hex or a key file (or use --key)
    #[arg(long, group = "seal_key")]
    pub to: Option<String>,

    /// Read the message from this file instead of stdin
    #[arg(long = "in")]
    pub input: Option<PathBuf>,

    /// Write the sealed message to this file instead of stdout
    #[arg(long = "out")]
    pub output: Option<PathBuf>,

    /// Base64 encode the sealed message
    #[arg(long)]
    pub armor: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SealError {
    #[error("Either --key or --to must be provided")]
    NoKey,
    #[error("Seal failed: {0}")]
    Crypto(#[from] CryptoError),
    #[error("State error: {0}")]
    State(#[from] StateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl crate::cli::op::Op for Seal {
    type Error = SealError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        if self.key.is_none() && self.to.is_none() {
            return Err(SealError::NoKey);
        }

        let plaintext = io::read_input(self.input.as_deref())?;

        let (sealed, armor) = if let Some(ref path) = self.key {
            let key = io::load_key(path)?;
            // config is optional for symmetric sealing
            let armor = self.armor || ctx.config_armor()?;
            (key.seal(&plaintext, &mut OsRng)?, armor)
        } else if let Some(ref to) = self.to {
            let recipient = io::resolve_key(to)?;
            let state = ctx.state()?;
            let pair = state.load_pair()?;
            tracing::debug!(
                sender = %pair.public().fingerprint(),
                recipient = %recipient.fingerprint(),
                "sealing for recipient"
            );
            (
                pair.seal_for(&recipient, &plaintext, &mut OsRng)?,
                self.armor || state.config.armor,
            )
        } else {
            return Err(SealError::NoKey);
        };

        let bytes = if armor { io::armor(&sealed) } else { sealed };
        io::write_output(self.output.as_deref(), &bytes)?;

        Ok(match self.output {
            Some(ref path) => format!("Sealed {} bytes to {}", bytes.len(), path.display()),
            None => String::new(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use std::path::Path;

    use common::prelude::{Key, NONCE_SIZE, OVERHEAD};
    use ezcrypt::state::{AppConfig, AppState};
    use tempfile::TempDir;

    use crate::cli::op::{Op, OpContext};
    use crate::cli::ops::Open;

    const MESSAGE: &[u8] = b"Ezcrypt is awesome!";
    const SEALED_LEN: usize = MESSAGE.len() + NONCE_SIZE + OVERHEAD;

    fn seal_op() -> Seal {
        Seal {
            key: None,
            to: None,
            input: None,
            output: None,
            armor: false,
        }
    }

    fn open_op() -> Open {
        Open {
            key: None,
            from: None,
            input: None,
            output: None,
            armor: false,
        }
    }

    /// Initialize a config directory and return its context and public key hex
    fn init(dir: &Path, armor: bool) -> (OpContext, String) {
        let config = AppConfig {
            armor,
            ..AppConfig::default()
        };
        let state = AppState::init(Some(dir.to_path_buf()), Some(config)).unwrap();
        let public = state.load_pair().unwrap().public().to_hex();
        (OpContext::new(Some(state.ezcrypt_dir)), public)
    }

    #[test]
    fn test_symmetric_round_trip() {
        let temp = TempDir::new().unwrap();
        // no config directory, so armor only comes from the flag
        let ctx = OpContext::new(Some(temp.path().join("uninitialized")));

        let key_path = temp.path().join("secret.key");
        io::persist_key(&Key::generate(&mut OsRng).unwrap(), &key_path).unwrap();
        let plain = temp.path().join("plain");
        let sealed = temp.path().join("sealed");
        let opened = temp.path().join("opened");
        fs::write(&plain, MESSAGE).unwrap();

        for armor in [false, true] {
            let output = Seal {
                key: Some(key_path.clone()),
                input: Some(plain.clone()),
                output: Some(sealed.clone()),
                armor,
                ..seal_op()
            }
            .execute(&ctx)
            .unwrap();
            assert!(output.starts_with("Sealed"));

            let bytes = fs::read(&sealed).unwrap();
            if armor {
                assert_eq!(io::dearmor(&bytes).unwrap().len(), SEALED_LEN);
            } else {
                assert_eq!(bytes.len(), SEALED_LEN);
            }

            Open {
                key: Some(key_path.clone()),
                input: Some(sealed.clone()),
                output: Some(opened.clone()),
                armor,
                ..open_op()
            }
            .execute(&ctx)
            .unwrap();
            assert_eq!(fs::read(&opened).unwrap(), MESSAGE);
        }
    }

    #[test]
    fn test_asymmetric_round_trip() {
        let temp = TempDir::new().unwrap();
        let (alice, alice_public) = init(&temp.path().join("alice"), false);
        let (bob, bob_public) = init(&temp.path().join("bob"), true);

        let plain = temp.path().join("plain");
        let sealed = temp.path().join("sealed");
        let opened = temp.path().join("opened");
        fs::write(&plain, MESSAGE).unwrap();

        // raw, alice to herself
        Seal {
            to: Some(alice_public.clone()),
            input: Some(plain.clone()),
            output: Some(sealed.clone()),
            ..seal_op()
        }
        .execute(&alice)
        .unwrap();
        assert_eq!(fs::read(&sealed).unwrap().len(), SEALED_LEN);
        Open {
            from: Some(alice_public.clone()),
            input: Some(sealed.clone()),
            output: Some(opened.clone()),
            ..open_op()
        }
        .execute(&alice)
        .unwrap();
        assert_eq!(fs::read(&opened).unwrap(), MESSAGE);

        // alice armors with the flag, to bob's public key file; bob's config dearmors
        let bob_key_file = temp.path().join("bob").join("public.key");
        Seal {
            to: Some(bob_key_file.to_string_lossy().into_owned()),
            input: Some(plain.clone()),
            output: Some(sealed.clone()),
            armor: true,
            ..seal_op()
        }
        .execute(&alice)
        .unwrap();
        Open {
            from: Some(alice_public.clone()),
            input: Some(sealed.clone()),
            output: Some(opened.clone()),
            ..open_op()
        }
        .execute(&bob)
        .unwrap();
        assert_eq!(fs::read(&opened).unwrap(), MESSAGE);

        // bob's config armors; alice needs the flag
        Seal {
            to: Some(alice_public.clone()),
            input: Some(plain.clone()),
            output: Some(sealed.clone()),
            ..seal_op()
        }
        .execute(&bob)
        .unwrap();
        let armored = fs::read(&sealed).unwrap();
        assert_eq!(io::dearmor(&armored).unwrap().len(), SEALED_LEN);
        Open {
            from: Some(bob_public.clone()),
            input: Some(sealed.clone()),
            output: Some(opened.clone()),
            armor: true,
            ..open_op()
        }
        .execute(&alice)
        .unwrap();
        assert_eq!(fs::read(&opened).unwrap(), MESSAGE);
    }

    #[test]
    fn test_seal_requires_key() {
        let temp = TempDir::new().unwrap();
        let ctx = OpContext::new(Some(temp.path().to_path_buf()));
        assert!(matches!(seal_op().execute(&ctx), Err(SealError::NoKey)));
    }

    #[test]
    fn test_seal_to_requires_local_pair() {
        let temp = TempDir::new().unwrap();
        let plain = temp.path().join("plain");
        fs::write(&plain, MESSAGE).unwrap();
        let peer = Key::generate(&mut OsRng).unwrap();

        let ctx = OpContext::new(Some(temp.path().join("uninitialized")));
        let result = Seal {
            to: Some(peer.to_hex()),
            input: Some(plain),
            output: Some(temp.path().join("sealed")),
            ..seal_op()
        }
        .execute(&ctx);
        assert!(matches!(
            result,
            Err(SealError::State(StateError::NotInitialized))
        ));
    }

    #[test]
    fn test_malformed_config_is_reported() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join("config");
        fs::create_dir(&config_dir).unwrap();
        fs::write(config_dir.join("config.toml"), "armor = [").unwrap();

        let key_path = temp.path().join("secret.key");
        io::persist_key(&Key::generate(&mut OsRng).unwrap(), &key_path).unwrap();
        let plain = temp.path().join("plain");
        fs::write(&plain, MESSAGE).unwrap();

        let result = Seal {
            key: Some(key_path),
            input: Some(plain),
            output: Some(temp.path().join("sealed")),
            ..seal_op()
        }
        .execute(&OpContext::new(Some(config_dir)));
        assert!(matches!(
            result,
            Err(SealError::State(StateError::TomlDe(_)))
        ));
        assert!(!temp.path().join("sealed").exists());
    }
}
