//! Run log file setup.
//!
//! Each invocation writes to its own timestamped log file so that audit runs
//! can be reviewed after the fact. Console output stays reserved for the
//! interactive UI; diagnostics only go to the file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use chrono::{DateTime, Local};
use tracing_subscriber::EnvFilter;

use crate::error::AuditError;

/// Initialize the global tracing subscriber writing to a per-run log file.
///
/// Returns the path of the created log file. `RUST_LOG` overrides the
/// configured log level when set.
pub fn init(log_dir: &Path, log_level: &str) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .map_err(|e| AuditError::Logging(format!("{}: {}", log_dir.display(), e)))?;

    let path = log_dir.join(file_name(&Local::now()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AuditError::Logging(format!("{}: {}", path.display(), e)))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}

/// Log file name for a run started at the given time.
fn file_name(started_at: &DateTime<Local>) -> String {
    format!("ec2-audit_{}.log", started_at.format("%Y%m%d_%H%M%S"))
}
