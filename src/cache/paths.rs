// Filesystem locations for config and cache.
// Both files live in the base directory, next to the executable by default.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Environment variable overriding the base directory.
pub const BASE_DIR_ENV: &str = "GHBAR_DIR";

const CONFIG_FILE: &str = "config.json";
const CACHE_FILE: &str = "cache.json";

/// Resolved file locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    base: PathBuf,
}

impl Paths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve the base directory from `GHBAR_DIR`, falling back to the
    /// directory holding the (symlink-resolved) executable.
    pub fn discover() -> Result<Self> {
        if let Some(dir) = env::var_os(BASE_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(Self::new(dir));
        }

        let exe = env::current_exe()?.canonicalize()?;
        let base = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::new(base))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path to the user configuration.
    pub fn config_path(&self) -> PathBuf {
        self.base.join(CONFIG_FILE)
    }

    /// Path to the cached API response.
    pub fn cache_path(&self) -> PathBuf {
        self.base.join(CACHE_FILE)
    }
}
