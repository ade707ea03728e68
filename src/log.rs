// src/log.rs
// Debug log file under the cache dir, one line per event with time since start:
//   0.004213s  INFO tir::store: using cached page from 2018-10-31
//
// Filter comes from RUST_LOG (default "info"). Terminal output is left to the renderer.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::LOG_FILE;

pub fn log_path() -> PathBuf {
    crate::store::cache_dir().join(LOG_FILE)
}

/// Install the file subscriber. Calling it twice is harmless; the second call is a no-op.
pub fn init() -> io::Result<PathBuf> {
    let path = log_path();
    init_at(&path)?;
    Ok(path)
}

pub fn init_at(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(fmt::time::uptime())
        .try_init();
    Ok(())
}
