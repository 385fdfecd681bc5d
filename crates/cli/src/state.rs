use std::{fs, path::PathBuf};

use common::prelude::{CryptoError, FileStore, Pair};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "ezcrypt";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const PUBLIC_KEY_FILE_NAME: &str = "public.key";
pub const PRIVATE_KEY_FILE_NAME: &str = "private.key";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Public half of the local pair, relative to the ezcrypt directory
    #[serde(default = "default_public_key")]
    pub public_key: String,
    /// Private half of the local pair, relative to the ezcrypt directory
    #[serde(default = "default_private_key")]
    pub private_key: String,
    /// Base64 encode sealed output (and decode open input) by default
    #[serde(default)]
    pub armor: bool,
}

fn default_public_key() -> String {
    PUBLIC_KEY_FILE_NAME.to_string()
}

fn default_private_key() -> String {
    PRIVATE_KEY_FILE_NAME.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_key: default_public_key(),
            private_key: default_private_key(),
            armor: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the ezcrypt directory (~/.ezcrypt)
    pub ezcrypt_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the ezcrypt directory path (custom or default ~/.ezcrypt)
    pub fn ezcrypt_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new ezcrypt directory with a fresh local pair
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let ezcrypt_dir = Self::ezcrypt_dir(custom_path)?;

        if ezcrypt_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&ezcrypt_dir)?;

        // leave nothing behind so init can be retried
        match Self::populate(ezcrypt_dir.clone(), config.unwrap_or_default()) {
            Ok(state) => Ok(state),
            Err(err) => {
                if let Err(cleanup) = fs::remove_dir_all(&ezcrypt_dir) {
                    tracing::warn!(
                        dir = %ezcrypt_dir.display(),
                        error = %cleanup,
                        "failed to remove ezcrypt directory after init failed"
                    );
                }
                Err(err)
            }
        }
    }

    /// Write the config and a fresh local pair into an existing directory
    fn populate(ezcrypt_dir: PathBuf, config: AppConfig) -> Result<Self, StateError> {
        let config_path = ezcrypt_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        let state = Self {
            ezcrypt_dir,
            config_path,
            config,
        };

        // Generate and save the local pair
        let pair = Pair::generate(&mut OsRng)?;
        pair.persist(
            &state.store(),
            &state.config.public_key,
            &state.config.private_key,
        )?;
        tracing::info!(
            dir = %state.ezcrypt_dir.display(),
            public = %pair.public().fingerprint(),
            "initialized ezcrypt directory"
        );

        Ok(state)
    }

    /// Load existing state from the ezcrypt directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let ezcrypt_dir = Self::ezcrypt_dir(custom_path)?;

        if !ezcrypt_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = ezcrypt_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            ezcrypt_dir,
            config_path,
            config,
        })
    }

    /// Key store rooted at the ezcrypt directory
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.ezcrypt_dir)
    }

    pub fn public_key_path(&self) -> PathBuf {
        self.store().path(&self.config.public_key)
    }

    pub fn private_key_path(&self) -> PathBuf {
        self.store().path(&self.config.private_key)
    }

    /// Load the local pair named in the config
    pub fn load_pair(&self) -> Result<Pair, StateError> {
        if !self.public_key_path().exists() {
            return Err(StateError::MissingFile(self.config.public_key.clone()));
        }
        if !self.private_key_path().exists() {
            return Err(StateError::MissingFile(self.config.private_key.clone()));
        }
        let pair = Pair::load(
            &self.store(),
            &self.config.public_key,
            &self.config.private_key,
        )?;
        Ok(pair)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("ezcrypt directory not initialized. Run 'ezcrypt init' first")]
    NotInitialized,

    #[error("ezcrypt directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("key error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
