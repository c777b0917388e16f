//! Errors raised while reading `.advancer/`.
//!
//! Every variant names the file or directory at fault so the CLI can point
//! the user at it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config.toml at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid sequence file {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Missing or malformed front matter in a Markdown step.
    #[error("invalid step file {path}: {reason}")]
    MarkdownParse { path: PathBuf, reason: String },

    #[error("cannot scan {path}: {source}")]
    DirectoryWalk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Step ids are the lookup key and must be unique within a sequence.
    #[error("{path}: duplicate step id '{id}' in sequence '{sequence}'")]
    DuplicateStepId {
        path: PathBuf,
        sequence: String,
        id: String,
    },

    #[error("{path}: initial step '{step}' is not a step of sequence '{sequence}'")]
    UnknownInitialStep {
        path: PathBuf,
        sequence: String,
        step: String,
    },

    #[error("{path}: duplicate sequence name '{name}'")]
    DuplicateSequence { path: PathBuf, name: String },

    #[error("sequence directory name is not valid UTF-8: {path}")]
    InvalidSequenceName { path: PathBuf },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
