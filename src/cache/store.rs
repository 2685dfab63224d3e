// Cache store for the last fetched notification list.
// The file's mtime is the freshness timestamp; content is replaced wholesale.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Single-file JSON cache.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached JSON, or None if there is no cache file.
    pub fn read(&self) -> Result<Option<Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Replace the cache content with `data` as indented JSON.
    pub fn write<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(data)?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        if let Err(e) = replace_via(&temp_path, &self.path, json.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), bytes = json.len(), "cache written");
        Ok(())
    }

    /// Time since the cache was last written, or None if absent.
    pub fn age(&self) -> Result<Option<Duration>> {
        let modified = match fs::metadata(&self.path).and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let modified: DateTime<Utc> = modified.into();
        // An mtime in the future counts as just written.
        let age = Utc::now()
            .signed_duration_since(modified)
            .to_std()
            .unwrap_or(Duration::ZERO);

        Ok(Some(age))
    }

    /// Whether the cache exists and is younger than `window`.
    pub fn is_fresh(&self, window: Duration) -> Result<bool> {
        Ok(self.age()?.is_some_and(|age| age < window))
    }
}

/// Write `bytes` to `temp_path`, then rename it over `path`.
fn replace_via(temp_path: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(temp_path, path)
}
