//! User-facing notification delivery.
//!
//! The cycle machine only *requests* a notification (via
//! [`Effect::Notify`](crate::events::Effect)); delivery is a capability
//! the frontend constructs once and hands to its event loop. Failure to
//! deliver is reported upward and never blocks a state transition.

use std::io::Write;

use crate::error::NotifyError;

/// A notification delivery channel.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}

/// Desktop notification via the platform notification service.
#[derive(Debug, Default)]
pub struct DesktopNotifier {
    /// Icon name or path passed through to the notification daemon.
    icon: Option<String>,
}

impl DesktopNotifier {
    pub fn new(icon: Option<String>) -> Self {
        Self { icon }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let mut notification = notify_rust::Notification::new();
        notification.summary(title).body(message);
        if let Some(icon) = &self.icon {
            notification.icon(icon);
        }
        notification.show()?;
        Ok(())
    }
}

/// Rings the terminal bell.
///
/// BEL is not a printable character, so this is safe to emit while the
/// terminal is in raw mode with an alternate screen active.
#[derive(Debug, Default)]
pub struct SoundNotifier;

impl Notifier for SoundNotifier {
    fn notify(&self, _title: &str, _message: &str) -> Result<(), NotifyError> {
        let mut out = std::io::stderr();
        out.write_all(b"\x07")?;
        out.flush()?;
        Ok(())
    }
}

/// Fans a notification out to several channels.
///
/// Every notifier is attempted even when an earlier one fails; failures
/// are aggregated into a single [`NotifyError::Combo`] so no channel's
/// error suppresses another's attempt.
pub struct ComboNotifier {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl ComboNotifier {
    pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Notifier for ComboNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let mut failures = Vec::new();
        for notifier in &self.notifiers {
            if let Err(err) = notifier.notify(title, message) {
                failures.push(err);
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(NotifyError::Combo {
                attempted: self.notifiers.len(),
                failures,
            })
        }
    }
}
