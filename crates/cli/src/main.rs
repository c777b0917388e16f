use std::path::PathBuf;

use adv_protocol::Action;
use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "advancer")]
#[command(about = "Step through ordered sequences of steps")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root containing `.advancer/` (default: current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the step viewer (the default when no command is given)
    Tui {
        /// Sequence to open (default: the first one found)
        sequence: Option<String>,
    },

    /// List loaded sequences
    List,

    /// Apply navigation actions to a sequence and print each window
    Run {
        /// Sequence to run
        sequence: String,

        /// Start at this step id instead of the sequence's initial step
        #[arg(short, long)]
        initial: Option<String>,

        /// Action to apply: first, next, previous, last or match:<id> (the id is case-sensitive)
        #[arg(short, long = "action")]
        actions: Vec<Action>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create a `.advancer/` directory from the built-in templates
    Init {
        /// Overwrite an existing `.advancer/` directory
        #[arg(short, long)]
        force: bool,

        /// Only write config.toml and one sequence
        #[arg(short, long)]
        minimal: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let is_tui_mode = matches!(cli.command, None | Some(Commands::Tui { .. }));
    let logging_handle = logging::init_logging(&root, is_tui_mode, cli.debug)?;
    if let Some(path) = &logging_handle.log_file_path {
        tracing::debug!(path = %path.display(), "logging to file");
    }

    match cli.command {
        None => commands::cmd_tui(&root, None).await?,
        Some(Commands::Tui { sequence }) => commands::cmd_tui(&root, sequence.as_deref()).await?,
        Some(Commands::List) => commands::cmd_list(&root).await?,
        Some(Commands::Run {
            sequence,
            initial,
            actions,
            json,
        }) => commands::cmd_run(&root, &sequence, initial.as_deref(), &actions, json).await?,
        Some(Commands::Init { force, minimal }) => commands::cmd_init(&root, force, minimal).await?,
    }

    drop(logging_handle);
    Ok(())
}
