// Presenters render the cached notifications for the bar or a popup.

pub mod bar;
pub mod notify;

pub use bar::bar_output;
pub use notify::{CommandNotifier, Notifier, notify};
