//! Optional process-wide file logging.
//!
//! docstash is a library and never initializes logging on its own; the
//! embedding application may call [`init_logging`] once to route `log`
//! macros from this crate (and the rest of the process) into size-rotated
//! files.
//!
//! Initialization is idempotent for the same arguments. Re-initialization
//! with a different level or directory is rejected rather than silently
//! switched, and initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "docstash";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: String,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initialize file logging once per process.
///
/// # Errors
/// - Returns an error when `level` is not a valid log specification.
/// - Returns an error when `log_dir` cannot be created.
/// - Returns an error when logging is already active with different
///   arguments.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    if let Some(state) = LOGGING_STATE.get() {
        return check_active_state(state, level, log_dir);
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        std::fs::create_dir_all(log_dir).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                log_dir.display()
            )
        })?;

        let logger = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        Ok(LoggingState {
            level: level.to_string(),
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    // Covers the race where another thread initialized first
    check_active_state(state, level, log_dir)
}

/// Returns the default log level for the current build mode:
/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn check_active_state(state: &LoggingState, level: &str, log_dir: &Path) -> Result<(), String> {
    if state.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }
    Ok(())
}
