use clap::Args;

use ezcrypt::state::{AppConfig, AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Armor sealed output with base64 by default
    #[arg(long)]
    pub armor: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Init failed: {0}")]
    State(#[from] StateError),
}

impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = AppConfig {
            armor: self.armor,
            ..AppConfig::default()
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;
        let pair = state.load_pair()?;

        Ok(format!(
            "Initialized ezcrypt directory at: {}\nPublic key: {}",
            state.ezcrypt_dir.display(),
            pair.public().to_hex()
        ))
    }
}
