// Copy-to-clipboard state machine
//
// One widget per copyable payload. Two feedback modes cover the two copy
// surfaces of the page: per-listing copy shows a timed "copied" confirmation,
// whole-section copy only emits a tracing diagnostic. A failed write in
// Confirm mode changes nothing and logs nothing; that silence is inherited
// behavior and kept on purpose (see DESIGN.md).

use super::clipboard::ClipboardSink;
use std::time::{Duration, Instant};

/// How long the "copied" confirmation stays visible
pub const CONFIRM_DURATION: Duration = Duration::from_secs(2);

/// Confirmation state of a single widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

/// What the widget does with the outcome of a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Show Copied for CONFIRM_DURATION after a successful write;
    /// stay silent on failure
    Confirm,
    /// Log the outcome, never show any state
    LogOnly,
}

/// A fixed text payload plus its copy confirmation state
pub struct CopyWidget {
    payload: String,
    feedback: Feedback,
    /// When the last successful Confirm-mode write happened.
    /// The confirmation window is [copied_at, copied_at + CONFIRM_DURATION);
    /// a newer copy overwrites the deadline, so an earlier window can never
    /// revert a later copy.
    copied_at: Option<Instant>,
}

impl CopyWidget {
    /// Widget with timed visual confirmation (the per-listing copy button)
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            feedback: Feedback::Confirm,
            copied_at: None,
        }
    }

    /// Widget that only logs outcomes (the whole-section copy action)
    pub fn log_only(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            feedback: Feedback::LogOnly,
            copied_at: None,
        }
    }

    /// Issue the clipboard write and settle the resulting state
    pub fn copy(&mut self, clipboard: &mut dyn ClipboardSink) {
        self.copy_at(clipboard, Instant::now());
    }

    /// Same as `copy`, with the clock injected for tests
    pub fn copy_at(&mut self, clipboard: &mut dyn ClipboardSink, now: Instant) {
        match clipboard.write_text(&self.payload) {
            Ok(()) => match self.feedback {
                // Restart the window: latest copy wins
                Feedback::Confirm => self.copied_at = Some(now),
                Feedback::LogOnly => {
                    tracing::info!(bytes = self.payload.len(), "copied to clipboard");
                }
            },
            Err(err) => match self.feedback {
                // No transition, no diagnostic - the user simply retries
                Feedback::Confirm => {}
                Feedback::LogOnly => {
                    tracing::error!(error = %err, "failed to copy to clipboard");
                }
            },
        }
    }

    /// Current confirmation state
    pub fn state(&self) -> CopyState {
        self.state_at(Instant::now())
    }

    /// Confirmation state as of `now`
    pub fn state_at(&self, now: Instant) -> CopyState {
        match self.copied_at {
            Some(at) if now.duration_since(at) < CONFIRM_DURATION => CopyState::Copied,
            _ => CopyState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    /// Scripted clipboard: records writes, optionally rejects them
    struct FakeClipboard {
        fail: bool,
        writes: Vec<String>,
    }

    impl FakeClipboard {
        fn working() -> Self {
            Self {
                fail: false,
                writes: Vec::new(),
            }
        }

        fn broken() -> Self {
            Self {
                fail: true,
                writes: Vec::new(),
            }
        }
    }

    impl ClipboardSink for FakeClipboard {
        fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                return Err(anyhow!("clipboard write rejected"));
            }
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_successful_copy_confirms_then_reverts() {
        let mut clipboard = FakeClipboard::working();
        let mut widget = CopyWidget::new("func start");
        let t0 = Instant::now();

        assert_eq!(widget.state_at(t0), CopyState::Idle);

        widget.copy_at(&mut clipboard, t0);
        assert_eq!(widget.state_at(t0), CopyState::Copied);
        assert_eq!(widget.state_at(t0 + secs(1.0)), CopyState::Copied);
        assert_eq!(widget.state_at(t0 + secs(2.1)), CopyState::Idle);
        assert_eq!(clipboard.writes, vec!["func start".to_string()]);
    }

    #[test]
    fn test_recopy_restarts_the_confirmation_window() {
        let mut clipboard = FakeClipboard::working();
        let mut widget = CopyWidget::new("payload");
        let t0 = Instant::now();

        widget.copy_at(&mut clipboard, t0);
        widget.copy_at(&mut clipboard, t0 + secs(1.0));

        // The first window would have ended at t0+2s; the second copy owns
        // the deadline now.
        assert_eq!(widget.state_at(t0 + secs(2.5)), CopyState::Copied);
        assert_eq!(widget.state_at(t0 + secs(3.1)), CopyState::Idle);
        assert_eq!(clipboard.writes.len(), 2);
    }

    #[test]
    fn test_failed_copy_never_confirms() {
        let mut clipboard = FakeClipboard::broken();
        let mut widget = CopyWidget::new("payload");
        let t0 = Instant::now();

        widget.copy_at(&mut clipboard, t0);
        assert_eq!(widget.state_at(t0), CopyState::Idle);
        assert_eq!(widget.state_at(t0 + secs(0.5)), CopyState::Idle);
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn test_failed_copy_keeps_prior_window() {
        // A failure while Copied must not disturb the window the earlier
        // success started.
        let mut working = FakeClipboard::working();
        let mut broken = FakeClipboard::broken();
        let mut widget = CopyWidget::new("payload");
        let t0 = Instant::now();

        widget.copy_at(&mut working, t0);
        widget.copy_at(&mut broken, t0 + secs(1.0));

        assert_eq!(widget.state_at(t0 + secs(1.5)), CopyState::Copied);
        assert_eq!(widget.state_at(t0 + secs(2.1)), CopyState::Idle);
    }

    #[test]
    fn test_widgets_do_not_share_state() {
        let mut clipboard = FakeClipboard::working();
        let mut first = CopyWidget::new("one");
        let mut second = CopyWidget::new("two");
        let t0 = Instant::now();

        first.copy_at(&mut clipboard, t0);
        assert_eq!(first.state_at(t0), CopyState::Copied);
        assert_eq!(second.state_at(t0), CopyState::Idle);

        second.copy_at(&mut clipboard, t0 + secs(1.5));
        assert_eq!(first.state_at(t0 + secs(2.1)), CopyState::Idle);
        assert_eq!(second.state_at(t0 + secs(2.1)), CopyState::Copied);
    }

    #[test]
    fn test_log_only_widget_never_confirms() {
        let mut clipboard = FakeClipboard::working();
        let mut widget = CopyWidget::log_only("full section text");
        let t0 = Instant::now();

        widget.copy_at(&mut clipboard, t0);
        assert_eq!(widget.state_at(t0), CopyState::Idle);
        assert_eq!(clipboard.writes, vec!["full section text".to_string()]);

        let mut broken = FakeClipboard::broken();
        widget.copy_at(&mut broken, t0 + secs(0.1));
        assert_eq!(widget.state_at(t0 + secs(0.1)), CopyState::Idle);
    }
}
