//! Rewriting links between the two notations.

/// Converts a Mac link (`smb://host/share/dir`) into a Windows link
/// (`file:\\host\share\dir`).
///
/// Trailing separators are dropped.
pub fn mac_to_windows(mac_path: &str) -> String {
    let windows = mac_path
        .replace("smb://", r"file:\\")
        .replace("//", r"file:\\")
        .replace('/', r"\");

    windows.trim_end_matches('\\').to_string()
}

/// Converts a Windows link (`file:\\host\share\dir`) into a Mac link
/// (`smb://host/share/dir`).
///
/// Stray forward slashes are treated as backslashes. A trailing separator is
/// kept as-is.
pub fn windows_to_mac(windows_path: &str) -> String {
    windows_path
        .replace('/', r"\")
        .replace(r"file:\\", "smb://")
        .replace(r"\\", "smb://")
        .replace('\\', "/")
}
