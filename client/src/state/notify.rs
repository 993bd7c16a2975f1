//! Transient user-facing notices (the snackbar).
//!
//! Every async action handler converts its own failure into one of
//! these; nothing propagates to a global handler.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Notice severity, mapped onto stylesheet tones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// CSS class suffix for this severity.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One visible notice.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Snackbar state shared through context. `seq` increments on every
/// `show` so the auto-dismiss timer can tell whether it is stale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotifyState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NotifyState {
    /// Replace the visible notice.
    pub fn show(&mut self, severity: Severity, message: impl Into<String>) {
        self.current = Some(Notice {
            message: message.into(),
            severity,
        });
        self.seq += 1;
    }

    /// Dismiss the visible notice.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
