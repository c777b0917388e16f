//! Configuration file loader for the `.advancer/` directory structure.
//!
//! This module loads and validates:
//! - `config.toml`: Global settings
//! - `sequences/*.yaml` / `sequences/*.yml`: One sequence per file
//! - `sequences/<name>/*.md`: One step per Markdown file, front matter
//!   carrying `id` and `title`, ordered by file name

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use adv_protocol::GlobalConfig;
use adv_protocol::SequenceDef;
use adv_protocol::StepDef;
use gray_matter::engine::YAML;
use gray_matter::Matter;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Name of the project directory holding advancer configuration.
pub const ADVANCER_DIR: &str = ".advancer";

/// Front matter of a Markdown step file.
#[derive(Debug, Deserialize)]
struct StepFrontMatter {
    id: String,
    #[serde(default)]
    title: String,
}

/// Loads all configuration from the `.advancer/` directory.
///
/// # Arguments
///
/// * `root` - Root directory containing the `.advancer/` folder
///
/// # Returns
///
/// An `AppConfig` containing all loaded configuration. Missing directories or
/// files yield defaults rather than errors.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - Files have invalid syntax (TOML, YAML, or Markdown front matter)
/// - A sequence repeats a step id, names an unknown initial step, or reuses
///   the name of another sequence
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let adv_dir = root.join(ADVANCER_DIR);

    // If .advancer doesn't exist, return default config
    if !adv_dir.exists() {
        debug!(root = %root.display(), "no .advancer directory, using defaults");
        return Ok(AppConfig::default());
    }

    let global = load_global_config(&adv_dir)?;
    let sequences = load_sequences(&adv_dir)?;

    debug!(sequences = sequences.len(), "configuration loaded");

    Ok(AppConfig { global, sequences })
}

/// Loads global configuration from `config.toml`.
fn load_global_config(adv_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = adv_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path,
            source,
        })?;

    Ok(config)
}

/// Loads every sequence under `sequences/`.
fn load_sequences(adv_dir: &Path) -> ConfigResult<Vec<SequenceDef>> {
    let sequences_dir = adv_dir.join("sequences");

    if !sequences_dir.exists() {
        return Ok(Vec::new());
    }

    let mut sequences: Vec<SequenceDef> = Vec::new();

    for entry in WalkDir::new(&sequences_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: sequences_dir.clone(),
            source,
        })?;

        let path = entry.path();

        let sequence = if entry.file_type().is_dir() {
            load_markdown_sequence(path)?
        } else {
            let ext = path.extension().and_then(|s| s.to_str());
            if ext != Some("yaml") && ext != Some("yml") {
                trace!(path = %path.display(), "skipping non-sequence file");
                continue;
            }
            load_yaml_sequence(path)?
        };

        validate_sequence(path, &sequence)?;

        if sequences.iter().any(|s| s.name == sequence.name) {
            return Err(ConfigError::DuplicateSequence {
                path: path.to_path_buf(),
                name: sequence.name,
            });
        }

        sequences.push(sequence);
    }

    Ok(sequences)
}

fn load_yaml_sequence(path: &Path) -> ConfigResult<SequenceDef> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a directory of Markdown step files as one sequence named after the
/// directory.
fn load_markdown_sequence(dir: &Path) -> ConfigResult<SequenceDef> {
    let name = dir
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConfigError::InvalidSequenceName {
            path: dir.to_path_buf(),
        })?
        .to_string();

    let mut steps = Vec::new();
    let matter = Matter::<YAML>::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let result = matter.parse(&content);

        let front: StepFrontMatter = result
            .data
            .ok_or_else(|| ConfigError::MarkdownParse {
                path: path.to_path_buf(),
                reason: "Missing YAML front matter".to_string(),
            })?
            .deserialize()
            .map_err(|e| ConfigError::MarkdownParse {
                path: path.to_path_buf(),
                reason: format!("Failed to deserialize front matter: {e}"),
            })?;

        steps.push(StepDef {
            id: front.id,
            title: front.title,
            body: result.content.trim().to_string(),
        });
    }

    Ok(SequenceDef {
        name,
        description: String::new(),
        initial_step: None,
        steps,
    })
}

/// Step ids must be unique and the initial step must exist.
fn validate_sequence(path: &Path, sequence: &SequenceDef) -> ConfigResult<()> {
    let mut seen = HashSet::new();
    for step in &sequence.steps {
        if !seen.insert(step.id.as_str()) {
            return Err(ConfigError::DuplicateStepId {
                path: path.to_path_buf(),
                sequence: sequence.name.clone(),
                id: step.id.clone(),
            });
        }
    }

    if let Some(initial) = &sequence.initial_step {
        if sequence.find_step(initial).is_none() {
            return Err(ConfigError::UnknownInitialStep {
                path: path.to_path_buf(),
                sequence: sequence.name.clone(),
                step: initial.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adv_protocol::LastStepMode;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_config_acceptance() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let adv_dir = root.join(ADVANCER_DIR);

        fs::create_dir_all(adv_dir.join("sequences/release")).expect("Failed to create dirs");

        fs::write(adv_dir.join("config.toml"), r#"last-step = "final""#)
            .expect("Failed to write config.toml");

        let onboarding = r#"name: onboarding
description: First run walkthrough
initial-step: account
steps:
  - id: welcome
    title: Welcome
  - id: account
    title: Create an account
  - id: done
    title: All set
"#;
        fs::write(adv_dir.join("sequences/onboarding.yaml"), onboarding)
            .expect("Failed to write sequence file");

        // Written out of order on purpose; file names decide the order.
        fs::write(
            adv_dir.join("sequences/release/02-tag.md"),
            "---\nid: tag\ntitle: Tag the release\n---\n\nRun `git tag`.\n",
        )
        .expect("Failed to write step file");
        fs::write(
            adv_dir.join("sequences/release/01-freeze.md"),
            "---\nid: freeze\ntitle: Freeze main\n---\nNo more merges.",
        )
        .expect("Failed to write step file");

        let config = load_config(root).await.expect("Failed to load config");

        assert_eq!(config.global.last_step, LastStepMode::Final);
        assert_eq!(config.sequences.len(), 2);

        let onboarding = config
            .find_sequence("onboarding")
            .expect("onboarding should be loaded");
        assert_eq!(onboarding.steps.len(), 3);
        assert_eq!(onboarding.initial_step.as_deref(), Some("account"));

        let release = config.find_sequence("release").expect("release should be loaded");
        let ids: Vec<&str> = release.steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["freeze", "tag"]);
        assert_eq!(release.steps[0].body, "No more merges.");
        assert_eq!(release.steps[1].body, "Run `git tag`.");
    }

    #[tokio::test]
    async fn test_load_config_empty_directory() {
        let dir = tempdir().expect("Failed to create temp dir");

        let config = load_config(dir.path())
            .await
            .expect("Should handle missing .advancer");

        assert_eq!(config.global.last_step, LastStepMode::PastEnd);
        assert!(config.sequences.is_empty());
    }

    #[tokio::test]
    async fn test_load_config_invalid_toml() {
        let dir = tempdir().expect("Failed to create temp dir");
        let adv_dir = dir.path().join(ADVANCER_DIR);
        fs::create_dir_all(&adv_dir).expect("Failed to create .advancer");

        fs::write(adv_dir.join("config.toml"), "last-step = [invalid toml")
            .expect("Failed to write config.toml");

        let result = load_config(dir.path()).await;

        if let Err(ConfigError::TomlParse { path, .. }) = result {
            assert!(path.ends_with("config.toml"));
        } else {
            panic!("Expected TomlParse error");
        }
    }

    #[tokio::test]
    async fn test_load_config_invalid_yaml() {
        let dir = tempdir().expect("Failed to create temp dir");
        let adv_dir = dir.path().join(ADVANCER_DIR);
        fs::create_dir_all(adv_dir.join("sequences")).expect("Failed to create sequences dir");

        fs::write(
            adv_dir.join("sequences/broken.yaml"),
            "name: test\n  invalid: [yaml",
        )
        .expect("Failed to write sequence file");

        let result = load_config(dir.path()).await;

        if let Err(ConfigError::YamlParse { path, .. }) = result {
            assert!(path.ends_with("broken.yaml"));
        } else {
            panic!("Expected YamlParse error");
        }
    }

    #[tokio::test]
    async fn test_load_config_step_without_front_matter() {
        let dir = tempdir().expect("Failed to create temp dir");
        let adv_dir = dir.path().join(ADVANCER_DIR);
        fs::create_dir_all(adv_dir.join("sequences/plain")).expect("Failed to create dir");

        fs::write(
            adv_dir.join("sequences/plain/01-step.md"),
            "Just plain markdown content",
        )
        .expect("Failed to write step file");

        let result = load_config(dir.path()).await;

        if let Err(ConfigError::MarkdownParse { path, reason }) = result {
            assert!(path.ends_with("01-step.md"));
            assert!(reason.contains("Missing YAML front matter"));
        } else {
            panic!("Expected MarkdownParse error");
        }
    }

    #[tokio::test]
    async fn test_load_config_rejects_duplicate_step_ids() {
        let dir = tempdir().expect("Failed to create temp dir");
        let adv_dir = dir.path().join(ADVANCER_DIR);
        fs::create_dir_all(adv_dir.join("sequences")).expect("Failed to create sequences dir");

        let yaml = "name: dup\nsteps:\n  - id: a\n  - id: a\n";
        fs::write(adv_dir.join("sequences/dup.yaml"), yaml).expect("Failed to write file");

        let result = load_config(dir.path()).await;

        if let Err(ConfigError::DuplicateStepId { sequence, id, .. }) = result {
            assert_eq!(sequence, "dup");
            assert_eq!(id, "a");
        } else {
            panic!("Expected DuplicateStepId error");
        }
    }

    #[tokio::test]
    async fn test_load_config_rejects_unknown_initial_step() {
        let dir = tempdir().expect("Failed to create temp dir");
        let adv_dir = dir.path().join(ADVANCER_DIR);
        fs::create_dir_all(adv_dir.join("sequences")).expect("Failed to create sequences dir");

        let yaml = "name: seq\ninitial-step: nope\nsteps:\n  - id: a\n";
        fs::write(adv_dir.join("sequences/seq.yml"), yaml).expect("Failed to write file");

        let result = load_config(dir.path()).await;

        if let Err(err @ ConfigError::UnknownInitialStep { .. }) = result {
            let message = err.to_string();
            assert!(message.contains("seq.yml"));
            assert!(message.contains("initial step 'nope'"));
        } else {
            panic!("Expected UnknownInitialStep error");
        }
    }

    #[tokio::test]
    async fn test_load_config_rejects_duplicate_sequence_names() {
        let dir = tempdir().expect("Failed to create temp dir");
        let adv_dir = dir.path().join(ADVANCER_DIR);
        fs::create_dir_all(adv_dir.join("sequences")).expect("Failed to create sequences dir");

        fs::write(adv_dir.join("sequences/a.yaml"), "name: same\n").expect("write a");
        fs::write(adv_dir.join("sequences/b.yaml"), "name: same\n").expect("write b");

        let result = load_config(dir.path()).await;
        assert!(
            matches!(result, Err(ConfigError::DuplicateSequence { ref name, .. }) if name == "same"),
            "Expected duplicate sequence name error"
        );
    }

    #[tokio::test]
    async fn test_load_config_ignores_non_matching_files() {
        let dir = tempdir().expect("Failed to create temp dir");
        let adv_dir = dir.path().join(ADVANCER_DIR);
        fs::create_dir_all(adv_dir.join("sequences/docs")).expect("Failed to create dirs");

        fs::write(adv_dir.join("sequences/notes.txt"), "Not a yaml file").expect("write");
        fs::write(adv_dir.join("sequences/docs/readme.txt"), "Not markdown").expect("write");
        fs::write(
            adv_dir.join("sequences/docs/01-intro.md"),
            "---\nid: intro\n---\nHello",
        )
        .expect("write");

        let config = load_config(dir.path())
            .await
            .expect("Should ignore non-matching files");

        assert_eq!(config.sequences.len(), 1);
        let docs = &config.sequences[0];
        assert_eq!(docs.name, "docs");
        assert_eq!(docs.steps.len(), 1);
        assert_eq!(docs.steps[0].display_title(), "intro");
    }
}
