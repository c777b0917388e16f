//! Navigation commands and state snapshots.
//!
//! `Action` is the serializable form of the sequencer's mutators, used by the
//! CLI (`--action next`) and anywhere a navigation has to be described as
//! data. `StepSnapshot` is the serializable form of the previous/active/next
//! window, reduced to step ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

/// A navigation command.
///
/// Uses tagged enum serialization:
/// ```json
/// { "type": "activateMatching", "payload": { "key": "review" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    /// Move to the first step.
    ActivateFirst,

    /// Move one step forward.
    ActivateNext,

    /// Move one step back.
    ActivatePrevious,

    /// Move to the end of the sequence.
    ActivateLast,

    /// Jump to the first step whose id equals `key`.
    ActivateMatching { key: String },
}

/// Error returned when parsing an [`Action`] from its short form fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    #[error("unknown action `{0}` (expected first, next, previous, last or match:<id>)")]
    Unknown(String),

    #[error("`match:` requires a step id")]
    MissingKey,
}

const MATCH_PREFIX: &str = "match:";

/// `prefix` is ASCII, so a case-insensitive comparison of the leading bytes
/// is enough; the remainder keeps its original case.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses the short form used on the command line:
    /// `first`, `next`, `previous` (or `prev`), `last`, `match:<id>`.
    /// Keywords are case-insensitive; the step id after `match:` is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(key) = strip_prefix_ignore_case(s, MATCH_PREFIX) {
            let key = key.trim();
            if key.is_empty() {
                return Err(ParseActionError::MissingKey);
            }
            return Ok(Action::ActivateMatching {
                key: key.to_string(),
            });
        }

        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(Action::ActivateFirst),
            "next" => Ok(Action::ActivateNext),
            "previous" | "prev" => Ok(Action::ActivatePrevious),
            "last" => Ok(Action::ActivateLast),
            _ => Err(ParseActionError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ActivateFirst => f.write_str("first"),
            Action::ActivateNext => f.write_str("next"),
            Action::ActivatePrevious => f.write_str("previous"),
            Action::ActivateLast => f.write_str("last"),
            Action::ActivateMatching { key } => write!(f, "match:{key}"),
        }
    }
}

/// The previous/active/next window reduced to step ids.
///
/// `None` means the slot is empty (before the start or past the end).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct StepSnapshot {
    pub previous: Option<String>,
    pub active: Option<String>,
    pub next: Option<String>,
}
