pub use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ezcrypt")]
#[command(about = "Seal and open messages with NaCl box and secretbox")]
pub struct Args {
    /// Path to the ezcrypt config directory (defaults to ~/.ezcrypt)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: crate::Command,
}
