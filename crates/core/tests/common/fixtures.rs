//! Test fixtures for step sequences.

use adv_protocol::StepDef;
use tempfile::TempDir;

/// Five steps with ids `step-1` .. `step-5`.
#[allow(dead_code)]
pub fn five_steps() -> Vec<StepDef> {
    (1..=5)
        .map(|n| StepDef::new(format!("step-{n}"), format!("I am step {n}")))
        .collect()
}

/// Create a temporary project with a YAML and a Markdown sequence.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project(config_toml: &str) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();

    std::fs::create_dir_all(root.join(".advancer/sequences/checklist"))?;
    std::fs::write(root.join(".advancer/config.toml"), config_toml)?;

    let tour = r#"
name: tour
initial-step: step-3
steps:
  - id: step-1
  - id: step-2
  - id: step-3
  - id: step-4
  - id: step-5
"#;
    std::fs::write(root.join(".advancer/sequences/tour.yaml"), tour)?;

    for (file, id) in [("a-first.md", "first"), ("b-second.md", "second")] {
        std::fs::write(
            root.join(".advancer/sequences/checklist").join(file),
            format!("---\nid: {id}\ntitle: {id}\n---\nBody of {id}"),
        )?;
    }

    Ok(temp_dir)
}
