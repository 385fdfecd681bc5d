// Library exports for the CLI binary and anything embedding ezcrypt's config layout

// App state (configuration, paths, local pair)
pub mod state;

pub use state::{AppConfig, AppState, StateError};
