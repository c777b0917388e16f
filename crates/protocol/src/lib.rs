//! # adv-protocol
//!
//! Shared data models for advancer.
//!
//! This crate defines the structures used for:
//! - Step sequence files (YAML sequences, Markdown step directories)
//! - Global configuration from `config.toml`
//! - Navigation commands and state snapshots
//!
//! ## Modules
//!
//! - [`step_models`]: Step and sequence definitions
//! - [`config_models`]: Global configuration from config.toml
//! - [`navigation`]: Navigation actions and snapshots
//!
//! All types derive `TS` so a client can share the same shapes.

pub mod config_models;
pub mod navigation;
pub mod step_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use navigation::*;
pub use step_models::*;
