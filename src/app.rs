// Run mode selection and dispatch.

use crate::cache::{CacheStore, Paths};
use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::present::{self, Notifier};

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print the unread count for the status bar.
    #[default]
    Bar,
    /// Show cached notifications in a desktop popup.
    Notify,
}

impl Mode {
    /// Only the last argument matters: `notify` selects the popup.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args.last().map(AsRef::as_ref) {
            Some("notify") => Mode::Notify,
            _ => Mode::Bar,
        }
    }
}

/// Loaded configuration plus the cache it works against.
pub struct App {
    config: Config,
    store: CacheStore,
}

impl App {
    pub fn new(config: Config, store: CacheStore) -> Self {
        Self { config, store }
    }

    /// Load config from the base directory.
    pub fn load(paths: &Paths) -> Result<Self> {
        let config = Config::load(&paths.config_path())?;
        Ok(Self::new(config, CacheStore::new(paths.cache_path())))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute `mode`, returning the line to print on stdout, if any.
    pub async fn run(&self, mode: Mode, notifier: &dyn Notifier) -> Result<Option<String>> {
        tracing::debug!(?mode, cache = %self.store.path().display(), "running");
        match mode {
            Mode::Notify => {
                present::notify(&self.config, &self.store, notifier)?;
                Ok(None)
            }
            Mode::Bar => {
                let mut client = GitHubClient::new(&self.config.token, &self.config.api_url)?;
                let output = present::bar_output(&self.config, &mut client, &self.store).await?;
                Ok(Some(output.to_string()))
            }
        }
    }
}
