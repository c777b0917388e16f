//! Global configuration models for `.advancer/config.toml`.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// How "activate last" positions the window.
///
/// `PastEnd` keeps the historical behaviour where the active step lands one
/// past the final element (and is therefore absent) while the final element
/// becomes the previous step. `Final` activates the final element itself.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "kebab-case")]
pub enum LastStepMode {
    /// Active = one past the end, previous = final step, next = none.
    #[default]
    PastEnd,

    /// Active = final step, previous = the one before it, next = none.
    Final,
}

/// Represents global settings from `.advancer/config.toml`.
///
/// # Example
///
/// ```toml
/// # .advancer/config.toml
/// last-step = "final"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Behaviour of the "activate last" navigation.
    #[serde(default)]
    pub last_step: LastStepMode,
}
