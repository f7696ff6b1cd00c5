//! User Notices
//!
//! One-way, fire-and-forget notice channel for flow outcomes. The
//! channel is an output port decoupled from control flow: flows emit,
//! nothing acknowledges. The HTTP layer drains a buffer into the
//! response for the frontend toast layer; tests read the same buffer
//! as a recording stub.

use std::sync::Mutex;

use serde::Serialize;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// A single user-facing notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

/// Notice output port
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);

    fn warn(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Buffering notifier. Collects notices in display order; the HTTP
/// layer drains it into the response body.
#[derive(Debug, Default)]
pub struct NoticeBuffer {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().expect("notice buffer poisoned"))
    }
}

impl Notifier for NoticeBuffer {
    fn notify(&self, severity: Severity, message: &str) {
        self.notices.lock().expect("notice buffer poisoned").push(Notice {
            severity,
            message: message.to_string(),
        });
    }
}
