//! # adv-tui
//!
//! Terminal user interface for advancer.
//!
//! Shows one sequence at a time as a step card: the previous, active and
//! next steps, the active step's body, and key bindings that move through
//! the sequence or jump to a step by id or title.

pub mod app;
pub mod event;
pub mod event_handler;
pub mod logging;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;

use adv_protocol::{GlobalConfig, SequenceDef};
use anyhow::Result;
use tracing::info;

/// Run the step viewer for `sequence` until the user quits.
pub async fn run_app(sequence: SequenceDef, config: GlobalConfig) -> Result<()> {
    info!(sequence = %sequence.name, steps = sequence.steps.len(), "opening step viewer");

    let mut tui = Tui::init()?;
    let mut app = App::new(&sequence, &config);
    let result = app.run(&mut tui).await;
    tui.restore()?;

    result
}
