//! Embedded template files for `.advancer` initialization.
//!
//! Everything under the crate's `templates/` directory is embedded at compile
//! time, so `advancer init` works without any files on disk. With the
//! `debug-embed` feature, debug builds embed as well instead of reading from
//! the filesystem.

use rust_embed::RustEmbed;

/// Embedded template files from `crates/core/templates/`.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Arguments
/// * `path` - Relative path from templates root (e.g., "config.toml")
///
/// # Example
/// ```
/// use adv_core::init::templates::get_template;
///
/// let config = get_template("config.toml").expect("config.toml should exist");
/// assert!(config.contains("last-step ="));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// List all template files under a prefix, sorted.
///
/// # Example
/// ```
/// use adv_core::init::templates::list_templates;
///
/// let sequences = list_templates("sequences/");
/// assert!(sequences.contains(&"sequences/onboarding.yaml".to_string()));
/// ```
pub fn list_templates(prefix: &str) -> Vec<String> {
    let mut paths: Vec<String> = TemplateAssets::iter()
        .filter(|path| path.starts_with(prefix))
        .map(|path| path.to_string())
        .collect();
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_template() {
        let content = get_template("config.toml").expect("config.toml should be embedded");
        assert!(content.contains("last-step ="));
    }

    #[test]
    fn test_get_onboarding_sequence() {
        let content = get_template("sequences/onboarding.yaml")
            .expect("sequences/onboarding.yaml should be embedded");
        assert!(content.contains("name: onboarding"));
    }

    #[test]
    fn test_get_nonexistent_template() {
        assert!(get_template("nonexistent.txt").is_none());
    }

    #[test]
    fn test_list_markdown_sequence_in_order() {
        let steps = list_templates("sequences/release-checklist/");
        assert_eq!(
            steps,
            vec![
                "sequences/release-checklist/01-freeze.md".to_string(),
                "sequences/release-checklist/02-changelog.md".to_string(),
                "sequences/release-checklist/03-tag.md".to_string(),
                "sequences/release-checklist/04-publish.md".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_empty_prefix() {
        // config.toml, one YAML sequence, four Markdown steps
        assert_eq!(list_templates("").len(), 6);
    }
}
