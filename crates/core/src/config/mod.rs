//! Project configuration: `.advancer/config.toml` and the step sequences
//! under `.advancer/sequences/`.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, ADVANCER_DIR};
pub use models::AppConfig;
