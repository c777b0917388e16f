//! Standalone step viewer.
//!
//! Loads `.advancer/` from the current directory and opens the sequence named
//! by the first argument, or the first sequence found. Logs go to
//! `.advancer/logs/`; set `RUST_LOG` to raise the level.

use adv_core::config::loader::load_config;
use adv_tui::{logging, run_app};
use anyhow::{bail, Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let root = std::env::current_dir().context("failed to read current directory")?;
    let logging_handle = logging::init_file_logging(&root, false)?;
    let config = load_config(&root).await?;

    let requested = std::env::args().nth(1);
    let Some(sequence) = config.sequence_or_first(requested.as_deref()).cloned() else {
        match requested {
            Some(name) => bail!("no sequence named '{name}'"),
            None => bail!("no sequences found in {}", root.display()),
        }
    };

    let result = run_app(sequence, config.global).await;
    drop(logging_handle);
    result
}
