//! The one thing `linkgopher` does: read a link, print its conversion, and
//! copy it back when it came from the clipboard.

use anyhow::Result;
use linkgopher_core::clipboard::ClipboardAccess;
use linkgopher_core::config::LinkGopherConfig;
use linkgopher_core::link;
use std::io::Write;

use crate::cli::input::InputSource;

/// Converts the link given by `words` (or the clipboard when empty) and
/// reports to `out`. Clipboard failures are printed, not returned; only
/// write errors on `out` surface as `Err`.
pub fn run_convert(
    words: &[String],
    clipboard: &mut impl ClipboardAccess,
    cfg: &LinkGopherConfig,
    out: &mut impl Write,
) -> Result<()> {
    report(words, clipboard, cfg, out)?;
    // Always end with an empty line.
    writeln!(out)?;
    Ok(())
}

fn report(
    words: &[String],
    clipboard: &mut impl ClipboardAccess,
    cfg: &LinkGopherConfig,
    out: &mut impl Write,
) -> Result<()> {
    let source = InputSource::from_args(words);
    tracing::debug!("input source: {:?}", source);

    let input = match source.read(clipboard) {
        Ok(input) => input,
        Err(err) => {
            tracing::warn!("reading input failed: {}", err);
            writeln!(out, "{}: Error reading input: {}", cfg.title, err)?;
            return Ok(());
        }
    };

    let conversion = link::convert_link_titled(&input, &cfg.title);
    tracing::info!("classified input as {:?}", conversion.style);
    writeln!(out, "{}", conversion.message)?;

    if !(source.is_clipboard() && conversion.is_converted()) {
        return Ok(());
    }
    if !cfg.copy_to_clipboard {
        tracing::debug!("clipboard write-back disabled by config");
        return Ok(());
    }

    match clipboard.write_text(&conversion.converted) {
        Ok(()) => writeln!(out, "Converted link copied to clipboard.")?,
        Err(err) => {
            tracing::warn!("clipboard write-back failed: {}", err);
            writeln!(out, "{}: Error writing to clipboard: {}", cfg.title, err)?;
        }
    }

    Ok(())
}
