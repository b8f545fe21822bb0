//! Clipboard access for copy actions
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.
//! The trait seam exists so the copy state machine can be tested against
//! a scripted clipboard instead of the real one.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// A destination for copied text.
///
/// The platform clipboard exposes exactly one operation: write text,
/// succeed or fail. Writes are atomic and last-write-wins.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The real system clipboard
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    /// Copy text to the system clipboard
    ///
    /// Common failure cases: no display server (headless Linux),
    /// permission denied.
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}
