//! CLI tests: argument parsing and the convert pipeline against an in-memory clipboard.

use super::Cli;
use clap::Parser;
use linkgopher_core::clipboard::{ClipboardAccess, ClipboardError};

pub(super) fn parse(args: &[&str]) -> Vec<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.link
}

/// Clipboard stand-in that records writes and can be told to fail.
#[derive(Debug, Default)]
pub(super) struct MemoryClipboard {
    pub text: String,
    pub fail_read: bool,
    pub fail_write: bool,
    pub reads: usize,
    pub writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn holding(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }
}

impl ClipboardAccess for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.reads += 1;
        if self.fail_read {
            return Err(ClipboardError::Unavailable(
                arboard::Error::ClipboardNotSupported,
            ));
        }
        Ok(self.text.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_write {
            return Err(ClipboardError::Write(arboard::Error::ClipboardOccupied));
        }
        self.text = text.to_string();
        self.writes.push(text.to_string());
        Ok(())
    }
}
