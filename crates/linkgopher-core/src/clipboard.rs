//! Clipboard access.
//!
//! The converter never touches the clipboard itself; callers go through
//! [`ClipboardAccess`] so tests can swap in an in-memory implementation.

use thiserror::Error;

/// Failure talking to the clipboard. Reported to the user, never retried.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),
    #[error("failed to read clipboard: {0}")]
    Read(#[source] arboard::Error),
    #[error("failed to write clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Minimal text clipboard capability.
pub trait ClipboardAccess {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`. The OS handle is opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(c) => c,
            None => arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?,
        };
        Ok(self.inner.insert(clipboard))
    }
}

impl ClipboardAccess for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match self.handle()?.get_text() {
            Ok(text) => Ok(text),
            // Empty (or non-text) clipboard reads as an empty string.
            Err(arboard::Error::ContentNotAvailable) => {
                tracing::debug!("clipboard holds no text");
                Ok(String::new())
            }
            Err(e) => Err(ClipboardError::Read(e)),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text)
            .map_err(ClipboardError::Write)
    }
}
