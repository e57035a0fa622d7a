//! Notification seam standing in for the page's toast utility.

use std::sync::{Mutex, PoisonError};

use tracing::{error, info};

/// Sink for transient user-facing notices.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that routes notices into the log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!(notice = message, "success notice");
    }

    fn error(&self, message: &str) {
        error!(notice = message, "error notice");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A notice captured by [`MemoryNotifier`].
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Buffering notifier for headless operation and tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, kind: NoticeKind, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice {
                kind,
                message: message.to_string(),
            });
    }

    /// All notices captured so far, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages of the captured error notices, in order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Error)
    }

    /// Messages of the captured success notices, in order.
    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Success)
    }

    fn of_kind(&self, kind: NoticeKind) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|notice| notice.kind == kind)
            .map(|notice| notice.message)
            .collect()
    }
}

impl Notifier for MemoryNotifier {
    fn success(&self, message: &str) {
        self.push(NoticeKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeKind::Error, message);
    }
}
