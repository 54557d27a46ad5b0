//! Rolling file logger for the portfolio core.
//!
//! # Invariants
//! - The logger starts at most once per process. A repeat call with the same
//!   level and directory is a no-op; any other repeat call is rejected.
//! - Panics are logged as one capped line before the previous hook runs.
//! - Initialization never panics.

use crate::config::CoreConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};

const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_MESSAGE_CHARS: usize = 120;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    level: LevelFilter,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts the rolling file logger under `log_dir`.
///
/// # Errors
/// - `log_dir` is relative or cannot be created.
/// - A logger is already running with another level or directory.
/// - The `flexi_logger` backend fails to start.
pub fn init_logging(level: LevelFilter, log_dir: &Path) -> Result<(), String> {
    if !log_dir.is_absolute() {
        return Err(format!("log_dir must be absolute: `{}`", log_dir.display()));
    }
    let active = ACTIVE.get_or_try_init(|| start_logger(level, log_dir))?;
    if active.level != level || active.dir != log_dir {
        return Err(format!(
            "logger already running with level {} at `{}`",
            active.level,
            active.dir.display()
        ));
    }
    Ok(())
}

/// Starts logging when the configuration names a log directory.
///
/// Returns `Ok(false)` without a directory; log macros then stay silent.
pub fn init_logging_from_config(config: &CoreConfig) -> Result<bool, String> {
    match config.log_dir.as_deref() {
        Some(dir) => init_logging(config.log_level, dir).map(|()| true),
        None => Ok(false),
    }
}

/// Level and directory of the running logger, or `None` before init.
pub fn logging_status() -> Option<(LevelFilter, PathBuf)> {
    let active = ACTIVE.get()?;
    Some((active.level, active.dir.clone()))
}

/// `Debug` for debug builds, `Info` for release builds.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn start_logger(level: LevelFilter, dir: &Path) -> Result<ActiveLogger, String> {
    if let Err(err) = std::fs::create_dir_all(dir) {
        return Err(format!("cannot create log directory `{}`: {err}", dir.display()));
    }

    let handle = Logger::with(level)
        .log_to_file(FileSpec::default().directory(dir).basename("portfolio"))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("cannot start file logger: {err}"))?;

    install_panic_logger();
    info!(
        "event=logging_init module=logging status=ok level={level} dir={} version={}",
        dir.display(),
        crate::core_version()
    );

    Ok(ActiveLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

// Runs once: `start_logger` only executes inside the successful `ACTIVE` init.
fn install_panic_logger() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info.location().map(ToString::to_string).unwrap_or_default();
        error!(
            "event=panic module=core status=error location={location} message={}",
            capped_first_line(panic_text(info.payload()), MAX_PANIC_MESSAGE_CHARS)
        );
        previous(info);
    }));
}

fn panic_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&str>() {
        return *text;
    }
    payload
        .downcast_ref::<String>()
        .map_or("non-string payload", String::as_str)
}

fn capped_first_line(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let mut capped: String = first_line.chars().take(max_chars).collect();
    if first_line.chars().count() > max_chars {
        capped.push_str("...");
    }
    capped
}
