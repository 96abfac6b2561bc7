//! Where the link comes from: command-line words or the clipboard.

use linkgopher_core::clipboard::{ClipboardAccess, ClipboardError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Command-line words joined with single spaces.
    Args(String),
    Clipboard,
}

impl InputSource {
    /// No words means "read the clipboard".
    pub fn from_args(args: &[String]) -> Self {
        if args.is_empty() {
            InputSource::Clipboard
        } else {
            InputSource::Args(args.join(" "))
        }
    }

    pub fn is_clipboard(&self) -> bool {
        matches!(self, InputSource::Clipboard)
    }

    /// Returns the raw link text. Only the clipboard source can fail.
    pub fn read(&self, clipboard: &mut impl ClipboardAccess) -> Result<String, ClipboardError> {
        match self {
            InputSource::Args(link) => Ok(link.clone()),
            InputSource::Clipboard => clipboard.read_text(),
        }
    }
}
