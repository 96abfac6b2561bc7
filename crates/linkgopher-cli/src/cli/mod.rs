//! CLI for LinkGopher.

mod commands;
mod input;

use anyhow::Result;
use clap::Parser;
use linkgopher_core::clipboard::SystemClipboard;
use linkgopher_core::config::{self, LinkGopherConfig};
use std::io;

use commands::run_convert;

/// Top-level CLI for LinkGopher.
#[derive(Debug, Parser)]
#[command(name = "linkgopher", version)]
#[command(
    about = "LinkGopher: convert network links between Windows (file:\\\\) and Mac (smb://) notation",
    long_about = "Converts a Windows link such as file:\\\\host\\share\\dir into a Mac link \
                  such as smb://host/share/dir and back. Without arguments the link is read \
                  from the clipboard and the result is copied back to it."
)]
pub struct Cli {
    /// Link to convert. Several words are joined with single spaces. Reads the clipboard when omitted.
    #[arg(value_name = "LINK", num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub link: Vec<String>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().unwrap_or_else(|err| {
            tracing::warn!("using default config: {:#}", err);
            LinkGopherConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        let mut clipboard = SystemClipboard::new();
        let stdout = io::stdout();
        run_convert(&cli.link, &mut clipboard, &cfg, &mut stdout.lock())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
