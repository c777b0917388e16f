//! Logging initialization for the `advancer` binary.
//!
//! TUI mode: logs to `.advancer/logs/advancer-{datetime}.log`
//! CLI mode: logs to stderr

use std::path::Path;

use adv_tui::logging::{filter_directive, init_file_logging, LoggingHandle};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber.
///
/// In TUI mode stderr belongs to the terminal UI, so the viewer's file
/// subscriber is used. When there is no `.advancer/` directory the logs are
/// dropped rather than creating one.
pub fn init_logging(root: &Path, is_tui_mode: bool, debug_override: bool) -> Result<LoggingHandle> {
    if is_tui_mode {
        return init_file_logging(root, debug_override).map_err(|e| eyre!(e));
    }

    let directive = filter_directive(debug_override, std::env::var("RUST_LOG").ok());
    tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(LoggingHandle::disabled())
}
