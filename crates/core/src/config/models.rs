//! Configuration models that aggregate all settings.

use adv_protocol::GlobalConfig;
use adv_protocol::SequenceDef;

/// Unified application configuration loaded from the `.advancer/` directory.
///
/// This structure aggregates:
/// - `config.toml`: Global settings
/// - `sequences/*.yaml`: Sequences defined in a single file
/// - `sequences/<name>/*.md`: Sequences defined as one Markdown file per step
///
/// # Example
///
/// ```rust,no_run
/// use adv_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} sequences", config.sequences.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Global settings from `config.toml`.
    pub global: GlobalConfig,

    /// All sequences, ordered by file name.
    pub sequences: Vec<SequenceDef>,
}

impl AppConfig {
    /// Find a sequence by name.
    pub fn find_sequence(&self, name: &str) -> Option<&SequenceDef> {
        self.sequences.iter().find(|sequence| sequence.name == name)
    }

    /// The named sequence, or the first one when `name` is `None`.
    pub fn sequence_or_first(&self, name: Option<&str>) -> Option<&SequenceDef> {
        match name {
            Some(name) => self.find_sequence(name),
            None => self.sequences.first(),
        }
    }
}
