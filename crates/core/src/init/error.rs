//! Errors raised while scaffolding `.advancer/`.

use std::path::PathBuf;
use thiserror::Error;

pub type InitResult<T> = Result<T, InitError>;

#[derive(Debug, Error)]
pub enum InitError {
    /// Refusing to overwrite an existing project without `--force`.
    #[error("{0} already exists; pass --force to overwrite it")]
    DirectoryExists(PathBuf),

    /// The binary was built without this template embedded.
    #[error("template '{0}' is not embedded in this build")]
    TemplateNotFound(String),

    #[error("cannot create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
