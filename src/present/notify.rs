// Popup presenter: formats cached notifications and hands them to a
// desktop notifier. Never triggers a fetch.

use std::process::Command;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{GhbarError, Result};
use crate::github::Notification;

/// Something that can show a desktop popup.
pub trait Notifier {
    fn send(&self, title: &str, body: &str) -> Result<()>;
}

/// Runs an external program as `program <title> <body>`.
///
/// Arguments go through an argv, not a shell, so quotes in titles are safe.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
}

impl CommandNotifier {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Notifier for CommandNotifier {
    fn send(&self, title: &str, body: &str) -> Result<()> {
        tracing::debug!(program = %self.program, "invoking notifier");
        let status = Command::new(&self.program)
            .arg(title)
            .arg(body)
            .status()
            .map_err(|e| GhbarError::Notifier(format!("{}: {}", self.program, e)))?;

        if !status.success() {
            return Err(GhbarError::Notifier(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Render one line block per notification, newline separated.
pub fn format_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|n| format!("<b>{}</b>:\n {}", n.repository.full_name, n.subject.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Show the cached notifications in a popup.
///
/// Fails if the cache is missing or does not hold a list of notifications.
pub fn notify(config: &Config, store: &CacheStore, notifier: &dyn Notifier) -> Result<()> {
    let data = store
        .read()?
        .ok_or_else(|| GhbarError::CacheMissing(store.path().to_path_buf()))?;
    let notifications: Vec<Notification> = serde_json::from_value(data)?;

    if notifications.is_empty() {
        tracing::info!("no notifications to show");
        return Ok(());
    }

    notifier.send(&config.title, &format_notifications(&notifications))
}
