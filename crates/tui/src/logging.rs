//! File logging for the step viewer.
//!
//! While the viewer owns the terminal, stderr output would tear the screen,
//! so logs go to `.advancer/logs/advancer-{datetime}.log` instead. Both the
//! standalone `adv-tui` binary and `advancer tui` install this subscriber.

use std::path::{Path, PathBuf};

use adv_core::config::loader::ADVANCER_DIR;
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "warn";

/// Keeps the log writer alive; drop it last so buffered lines are flushed.
pub struct LoggingHandle {
    pub _guard: Option<WorkerGuard>,
    pub log_file_path: Option<PathBuf>,
}

impl LoggingHandle {
    pub fn disabled() -> Self {
        Self {
            _guard: None,
            log_file_path: None,
        }
    }
}

/// Directory viewer logs are written to.
pub fn logs_dir(root: &Path) -> PathBuf {
    root.join(ADVANCER_DIR).join("logs")
}

/// Timestamped log file name, e.g. `advancer-20260117T093000Z.log`.
pub fn log_filename() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("advancer-{timestamp}.log")
}

/// `RUST_LOG` wins; otherwise `debug` selects debug and the default is warn.
pub fn filter_directive(debug: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if debug => "debug".to_string(),
        _ => DEFAULT_LEVEL.to_string(),
    }
}

/// Where the log file for `root` would go, or `None` when `root` has no
/// `.advancer/` directory. Logging never creates the project directory.
pub fn log_file_target(root: &Path) -> Option<(PathBuf, String)> {
    root.join(ADVANCER_DIR)
        .is_dir()
        .then(|| (logs_dir(root), log_filename()))
}

/// Install the global file subscriber for the project at `root`.
pub fn init_file_logging(root: &Path, debug: bool) -> Result<LoggingHandle> {
    let Some((logs_dir, log_filename)) = log_file_target(root) else {
        return Ok(LoggingHandle::disabled());
    };
    std::fs::create_dir_all(&logs_dir)?;

    let filter = EnvFilter::new(filter_directive(debug, std::env::var("RUST_LOG").ok()));
    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    Ok(LoggingHandle {
        _guard: Some(guard),
        log_file_path: Some(logs_dir.join(log_filename)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_logs_dir_is_inside_project() {
        let temp_dir = TempDir::new().unwrap();
        let dir = logs_dir(temp_dir.path());

        assert!(dir.ends_with(".advancer/logs"));
        assert!(dir.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_log_filename_format() {
        let name = log_filename();
        assert!(name.starts_with("advancer-"));
        assert!(name.ends_with("Z.log"));
    }

    #[test]
    fn test_filter_directive_precedence() {
        assert_eq!(filter_directive(false, None), "warn");
        assert_eq!(filter_directive(true, None), "debug");
        assert_eq!(
            filter_directive(true, Some("adv_core=trace".to_string())),
            "adv_core=trace"
        );
        assert_eq!(filter_directive(false, Some("  ".to_string())), "warn");
    }

    #[test]
    fn test_log_file_target_requires_project_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(log_file_target(temp_dir.path()).is_none());

        std::fs::create_dir(temp_dir.path().join(ADVANCER_DIR)).unwrap();
        let (dir, name) = log_file_target(temp_dir.path()).unwrap();
        assert_eq!(dir, logs_dir(temp_dir.path()));
        assert!(name.starts_with("advancer-"));
        // The logs directory itself is only created when logging starts.
        assert!(!dir.exists());
    }

    #[test]
    fn test_file_logging_without_project_is_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let handle = init_file_logging(temp_dir.path(), false).unwrap();

        assert!(handle.log_file_path.is_none());
        assert!(!temp_dir.path().join(ADVANCER_DIR).exists());
    }
}
