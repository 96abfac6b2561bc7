//! Link style detection.

/// Style of a candidate link, decided from its prefix and separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// `file:\\host\share` or `\\host\share`.
    Windows,
    /// `smb://host/share` or `//host/share`.
    Mac,
    Unrecognized,
}

/// Outcome of [`classify`]: the detected style and the text to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub style: LinkStyle,
    /// Trimmed input when recognized; the untouched input otherwise.
    pub link: &'a str,
}

const WINDOWS_PREFIXES: [&str; 2] = [r"file:\\", r"\\"];
const MAC_PREFIXES: [&str; 2] = ["smb://", "//"];

/// Detects whether `input` is a Windows link, a Mac link, or neither.
///
/// Leading and trailing whitespace is ignored. Input that mixes `/` with a
/// `\\` pair is ambiguous and always unrecognized.
pub fn classify(input: &str) -> Classification<'_> {
    let trimmed = input.trim();

    let unrecognized = Classification {
        style: LinkStyle::Unrecognized,
        link: input,
    };

    if trimmed.contains('/') && trimmed.contains(r"\\") {
        return unrecognized;
    }

    let style = if WINDOWS_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        LinkStyle::Windows
    } else if MAC_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        LinkStyle::Mac
    } else {
        return unrecognized;
    };

    Classification {
        style,
        link: trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(input: &str) -> LinkStyle {
        classify(input).style
    }

    #[test]
    fn smb_links() {
        assert_eq!(style("smb://example.corp/_path/folder/etc"), LinkStyle::Mac);
        assert_eq!(style("  smb://example.corp/_path/folder/etc"), LinkStyle::Mac);
        assert_eq!(style("smb://example.corp/_path/folder/etc/"), LinkStyle::Mac);
        assert_eq!(style("//example.corp/_path/folder/etc"), LinkStyle::Mac);
        assert_eq!(
            style("smb://example.corp/_path/folder/etc/file.txt"),
            LinkStyle::Mac
        );
    }

    #[test]
    fn windows_links() {
        assert_eq!(style(r"file:\\example.corp\_path\folder\etc"), LinkStyle::Windows);
        assert_eq!(style(r" file:\\example.corp\_path\folder\etc"), LinkStyle::Windows);
        assert_eq!(style(r"file:\\example.corp\_path\folder\etc\"), LinkStyle::Windows);
        assert_eq!(style(r"\\example.corp\_path\folder\etc"), LinkStyle::Windows);
        assert_eq!(
            style(r"file:\\example.corp\_path\folder\etc\file.txt"),
            LinkStyle::Windows
        );
    }

    #[test]
    fn broken_and_foreign_input() {
        assert_eq!(style("smb:/example.corppathfolderetc"), LinkStyle::Unrecognized);
        assert_eq!(style(r"file:\example.corppathfolderetc"), LinkStyle::Unrecognized);
        assert_eq!(style("https://example.com"), LinkStyle::Unrecognized);
        assert_eq!(style("normal string"), LinkStyle::Unrecognized);
        assert_eq!(style(""), LinkStyle::Unrecognized);
        assert_eq!(style("   "), LinkStyle::Unrecognized);
    }

    #[test]
    fn mixed_separators_are_rejected() {
        assert_eq!(
            style(r"normal string/with/forward\and\backslashes"),
            LinkStyle::Unrecognized
        );
        assert_eq!(style(r"\\host\share/sub"), LinkStyle::Unrecognized);
        assert_eq!(style(r"smb://host/share\\sub"), LinkStyle::Unrecognized);
    }

    #[test]
    fn recognized_input_is_trimmed() {
        let c = classify("  smb://a/b/c \n");
        assert_eq!(c.style, LinkStyle::Mac);
        assert_eq!(c.link, "smb://a/b/c");

        let c = classify("smb://a/b/c");
        assert_eq!(c.link, "smb://a/b/c");
    }

    #[test]
    fn unrecognized_input_is_returned_untouched() {
        let c = classify("  not a link  ");
        assert_eq!(c.style, LinkStyle::Unrecognized);
        assert_eq!(c.link, "  not a link  ");
    }

    #[test]
    fn surrounding_whitespace_does_not_change_style() {
        for input in [
            "smb://a/b",
            r"\\a\b",
            "plain",
            r"x/y\\z",
            r"file:\\a\b",
        ] {
            let padded = format!(" \t{input}  ");
            assert_eq!(style(&padded), style(input), "input {input:?}");
        }
    }
}
