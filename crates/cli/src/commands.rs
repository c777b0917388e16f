//! Subcommand implementations.

use std::path::Path;

use adv_core::config::loader::{load_config, ADVANCER_DIR};
use adv_core::config::models::AppConfig;
use adv_core::init::{generate_advancer_structure, list_templates, InitOptions};
use adv_core::sequencer::{DefSequencer, StepAction};
use adv_protocol::{Action, LastStepMode, SequenceDef, StepSnapshot};
use color_eyre::eyre::{bail, eyre, Result};
use colored::Colorize;
use serde_json::json;
use tracing::debug;

pub async fn cmd_tui(root: &Path, sequence: Option<&str>) -> Result<()> {
    let config = load_config(root).await?;
    let sequence = pick_sequence(&config, sequence, root)?.clone();

    adv_tui::run_app(sequence, config.global)
        .await
        .map_err(|e| eyre!(e))
}

pub async fn cmd_list(root: &Path) -> Result<()> {
    let config = load_config(root).await?;

    if config.sequences.is_empty() {
        println!(
            "No sequences found in {}. Run {} to create some.",
            root.join(ADVANCER_DIR).display(),
            "advancer init".bold()
        );
        return Ok(());
    }

    for sequence in &config.sequences {
        println!("{}", format_sequence_line(sequence));
    }
    Ok(())
}

/// Build a sequencer, apply `actions` in order and print the window after
/// construction and after every action.
pub async fn cmd_run(
    root: &Path,
    name: &str,
    initial: Option<&str>,
    actions: &[Action],
    json: bool,
) -> Result<()> {
    let config = load_config(root).await?;
    let mut sequence = pick_sequence(&config, Some(name), root)?.clone();

    if let Some(initial) = initial {
        if sequence.find_step(initial).is_none() {
            bail!("sequence '{}' has no step '{initial}'", sequence.name);
        }
        sequence.initial_step = Some(initial.to_string());
    }

    let mut sequencer = DefSequencer::from_definition(&sequence, &config.global);
    let mut windows = vec![("start".to_string(), sequencer.snapshot())];

    for action in actions {
        debug!(%action, "applying action");
        sequencer.dispatch(&StepAction::from_action(action));
        windows.push((action.to_string(), sequencer.snapshot()));
    }

    if json {
        let records: Vec<_> = windows
            .iter()
            .map(|(action, state)| json!({ "action": action, "state": state }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", format_run_header(&sequence, config.global.last_step));
        for (action, state) in &windows {
            println!("{}", format_window(action, state));
        }
    }
    Ok(())
}

pub async fn cmd_init(root: &Path, force: bool, minimal: bool) -> Result<()> {
    let adv_dir = generate_advancer_structure(InitOptions {
        target_dir: root.to_path_buf(),
        force,
        minimal,
    })
    .await?;

    println!("{} {}", "Created".green().bold(), adv_dir.display());
    println!("  config.toml");
    if minimal {
        println!("  sequences/onboarding.yaml");
    } else {
        for template in list_templates("sequences/") {
            println!("  {template}");
        }
    }
    Ok(())
}

fn pick_sequence<'a>(
    config: &'a AppConfig,
    name: Option<&str>,
    root: &Path,
) -> Result<&'a SequenceDef> {
    match (config.sequence_or_first(name), name) {
        (Some(sequence), _) => Ok(sequence),
        (None, Some(name)) => {
            let known: Vec<&str> = config.sequences.iter().map(|s| s.name.as_str()).collect();
            if known.is_empty() {
                bail!("no sequence named '{name}'");
            }
            bail!("no sequence named '{name}' (available: {})", known.join(", "))
        }
        (None, None) => bail!(
            "no sequences found in {}; run `advancer init` first",
            root.join(ADVANCER_DIR).display()
        ),
    }
}

fn format_sequence_line(sequence: &SequenceDef) -> String {
    let count = sequence.steps.len();
    let steps = if count == 1 { "step" } else { "steps" };
    let mut line = format!("{:<24} {count} {steps}", sequence.name.bold());
    if !sequence.description.is_empty() {
        line.push_str(&format!("  {}", sequence.description.dimmed()));
    }
    line
}

fn format_run_header(sequence: &SequenceDef, mode: LastStepMode) -> String {
    let mode = match mode {
        LastStepMode::PastEnd => "past-end",
        LastStepMode::Final => "final",
    };
    format!(
        "{} ({} steps, last-step: {mode})",
        sequence.name.bold(),
        sequence.steps.len()
    )
}

fn format_window(action: &str, state: &StepSnapshot) -> String {
    let slot = |step: &Option<String>| step.clone().unwrap_or_else(|| "-".to_string());
    format!(
        "  {:<14} {} {} {}",
        action.yellow(),
        format!("‹ {}", slot(&state.previous)).dimmed(),
        format!("● {}", slot(&state.active)).cyan().bold(),
        format!("{} ›", slot(&state.next)).dimmed(),
    )
}
