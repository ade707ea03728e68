// src/store.rs
// Same-day cache of the raw page.
//
// File layout: first line is the local date the page was fetched on (YYYY-MM-DD),
// everything after it is the page body untouched.

use std::{fs, io, path::{Path, PathBuf}};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::consts::{CACHE_FILE, CACHE_SUBDIR};

const DATE_FMT: &str = "%Y-%m-%d";

/// `<user cache dir>/tir`, or `./.tir` when the platform has no cache dir.
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join(CACHE_SUBDIR))
        .unwrap_or_else(|| PathBuf::from(join!(".", CACHE_SUBDIR)))
}

pub struct Cache {
    path: PathBuf,
}

impl Cache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open_default() -> Self {
        Self::new(cache_dir().join(CACHE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Body cached on `today`, if any. Missing, empty, stale or unreadable → `None`.
    pub fn load_fresh(&self, today: NaiveDate) -> Option<String> {
        let text = fs::read_to_string(&self.path).ok()?;
        let (date, body) = text.split_once('\n')?;
        let cached_on = NaiveDate::parse_from_str(date.trim(), DATE_FMT).ok()?;
        if cached_on != today || body.is_empty() {
            debug!("cache at {} is from {cached_on}, not {today}", self.path.display());
            return None;
        }
        info!("using cached page from {cached_on}");
        Some(s!(body))
    }

    pub fn save(&self, today: NaiveDate, body: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut contents = today.format(DATE_FMT).to_string();
        contents.push('\n');
        contents.push_str(body);
        fs::write(&self.path, contents)?;
        debug!("cached {} bytes to {}", body.len(), self.path.display());
        Ok(())
    }

    /// Empty the cache so the next run fetches again. A missing file is fine.
    pub fn clear(&self) -> io::Result<()> {
        match fs::write(&self.path, "") {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
