//! Toast notifications
//!
//! Every toast carries one of four severities and disappears on its own after
//! [`TOAST_DURATION`], or earlier when dismissed.

use std::fmt;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use uuid::Uuid;

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Local>,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: Local::now(),
            expires_at: now + TOAST_DURATION,
        }
    }

    /// `[severity] message`, the form printed by the CLI
    pub fn line(&self) -> String {
        format!("[{}] {}", self.severity, self.message)
    }
}

/// Live toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Notification>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        self.push_at(message, severity, Instant::now())
    }

    /// Push with an explicit creation instant (for deterministic expiry)
    pub fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> Uuid {
        let toast = Notification::new(message, severity, now);
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Remove a toast before it expires. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Dismiss the most recently pushed toast
    pub fn dismiss_newest(&mut self) -> bool {
        self.toasts.pop().is_some()
    }

    /// Drop toasts whose time is up. Returns `true` if any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| now < t.expires_at);
        self.toasts.len() != before
    }

    pub fn visible(&self) -> &[Notification] {
        &self.toasts
    }

    pub fn newest(&self) -> Option<&Notification> {
        self.toasts.last()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
