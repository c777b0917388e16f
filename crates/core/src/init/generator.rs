//! Directory structure and file generation for `.advancer` initialization.

use super::error::{InitError, InitResult};
use super::templates::{get_template, list_templates};
use crate::config::loader::ADVANCER_DIR;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options for initializing a `.advancer` directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Target directory where `.advancer` will be created.
    pub target_dir: PathBuf,

    /// Overwrite existing `.advancer` directory if it exists.
    pub force: bool,

    /// Create minimal template (config and the YAML sequence only).
    pub minimal: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
            minimal: false,
        }
    }
}

/// Generate a `.advancer` directory structure from the embedded templates.
///
/// ```text
/// .advancer/
/// ├── config.toml
/// └── sequences/
///     ├── onboarding.yaml
///     └── release-checklist/      (unless minimal)
///         ├── 01-freeze.md
///         └── ...
/// ```
///
/// # Errors
/// - `DirectoryExists` when `.advancer` exists and `force` is not set
/// - `TemplateNotFound` when an embedded template is missing
/// - `DirectoryCreate` / `FileWrite` on filesystem failures
pub async fn generate_advancer_structure(options: InitOptions) -> InitResult<PathBuf> {
    let adv_dir = options.target_dir.join(ADVANCER_DIR);

    if adv_dir.exists() && !options.force {
        return Err(InitError::DirectoryExists(adv_dir));
    }

    let sequences_dir = adv_dir.join("sequences");
    fs::create_dir_all(&sequences_dir).map_err(|source| InitError::DirectoryCreate {
        path: sequences_dir.clone(),
        source,
    })?;

    write_template_file(&adv_dir, "config.toml")?;

    if options.minimal {
        write_template_file(&adv_dir, "sequences/onboarding.yaml")?;
    } else {
        for sequence_path in list_templates("sequences/") {
            write_template_file(&adv_dir, &sequence_path)?;
        }
    }

    debug!(path = %adv_dir.display(), minimal = options.minimal, "initialized .advancer");

    Ok(adv_dir)
}

/// Write one embedded template below `adv_dir`, creating parent directories.
fn write_template_file(adv_dir: &Path, template_path: &str) -> InitResult<()> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = adv_dir.join(template_path);

    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|source| InitError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path,
        source,
    })?;

    Ok(())
}
