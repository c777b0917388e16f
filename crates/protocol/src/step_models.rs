//! Step and sequence definition models for `.advancer/sequences/`.
//!
//! A sequence is either a single YAML file listing its steps, or a directory
//! of Markdown files whose front matter carries the step metadata. Both forms
//! deserialize into [`SequenceDef`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single step of a sequence.
///
/// The `id` is the key used to locate a step inside its sequence; it must be
/// unique within one sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct StepDef {
    /// Identifier of the step, unique within its sequence.
    pub id: String,

    /// Human readable title. Falls back to the id when empty.
    #[serde(default)]
    pub title: String,

    /// Free-form body text (Markdown when loaded from a `.md` file).
    #[serde(default)]
    pub body: String,
}

impl StepDef {
    /// Create a step with an id and a title and an empty body.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: String::new(),
        }
    }

    /// Title to display, falling back to the id.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

/// A named, ordered list of steps.
///
/// # Example
///
/// ```yaml
/// # .advancer/sequences/onboarding.yaml
/// name: onboarding
/// description: First run walkthrough
/// initial-step: account
/// steps:
///   - id: welcome
///     title: Welcome
///   - id: account
///     title: Create an account
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case")]
pub struct SequenceDef {
    /// Unique name of the sequence.
    pub name: String,

    /// Optional short description shown in listings.
    #[serde(default)]
    pub description: String,

    /// Id of the step that is active when the sequence is opened.
    ///
    /// Defaults to the first step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_step: Option<String>,

    /// The ordered steps.
    #[serde(default)]
    pub steps: Vec<StepDef>,
}

impl SequenceDef {
    /// Find a step by id.
    pub fn find_step(&self, id: &str) -> Option<&StepDef> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// The step named by `initial_step`, if any.
    pub fn initial(&self) -> Option<&StepDef> {
        self.initial_step.as_deref().and_then(|id| self.find_step(id))
    }
}
