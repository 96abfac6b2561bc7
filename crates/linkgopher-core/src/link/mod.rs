//! Conversion between Windows (`file:\\host\share`) and Mac (`smb://host/share`)
//! network links.
//!
//! Detection is a pure prefix check on the trimmed input; conversion is plain
//! separator substitution. No hostname or share validation is done.

mod classify;
mod transform;

pub use classify::{classify, Classification, LinkStyle};
pub use transform::{mac_to_windows, windows_to_mac};

/// Default title printed in front of every message.
pub const APP_TITLE: &str = "LinkGopher";

/// Appended to the failure message when the rejected input looks like a
/// mangled `file:` link. Shells eat unquoted backslashes before we see them.
const QUOTING_HINT: &str = "\nNote: When passing a windows (file:) path as an argument, please either use single quotes for the entire path ('file:\\\\example.corp\\folder') or escape each backslash with a second one (\\\\).";

/// Result of [`convert_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub style: LinkStyle,
    /// User-facing summary, possibly spanning several lines.
    pub message: String,
    /// Converted link; empty when nothing was recognized.
    pub converted: String,
}

impl Conversion {
    pub fn is_converted(&self) -> bool {
        !self.converted.is_empty()
    }
}

/// Classifies `link` and converts it to the other notation, using the
/// default [`APP_TITLE`].
///
/// # Examples
///
/// - `convert_link("smb://host/share/")` → converted `file:\\host\share`
/// - `convert_link("not a link")` → message ends in "No valid link detected!", converted empty
pub fn convert_link(link: &str) -> Conversion {
    convert_link_titled(link, APP_TITLE)
}

/// Same as [`convert_link`] with a caller-supplied message title.
pub fn convert_link_titled(link: &str, title: &str) -> Conversion {
    let Classification { style, link } = classify(link);

    match style {
        LinkStyle::Windows => {
            let converted = windows_to_mac(link);
            Conversion {
                style,
                message: format!("{title} - Converted Windows to Mac Path: \n{converted}"),
                converted,
            }
        }
        LinkStyle::Mac => {
            let converted = mac_to_windows(link);
            Conversion {
                style,
                message: format!("{title} - Converted Mac to Windows Path: \n{converted}"),
                converted,
            }
        }
        LinkStyle::Unrecognized => {
            let hint = if link.contains("file:") { QUOTING_HINT } else { "" };
            Conversion {
                style,
                message: format!("{title} - No valid link detected!{hint}"),
                converted: String::new(),
            }
        }
    }
}
