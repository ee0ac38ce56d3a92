//! Utility functions

use std::path::Path;

/// Path of `path` relative to `root`, with `/` separators.
///
/// Returns `None` when `path` is not under `root`.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(normalize_path(&rel.to_string_lossy()))
}

/// Normalize directory separators to `/`.
pub fn normalize_path(path: &str) -> String {
    if std::path::MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Extension of a base name: the substring from its last `.`, dot included.
/// Empty when the name has no dot.
///
/// Unlike [`Path::extension`], a leading-dot name like `.env` has extension `.env`.
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx..],
        None => "",
    }
}

/// Bytes inspected when sniffing for binary content.
const BINARY_SNIFF_LEN: usize = 8000;

/// Heuristic binary check: a NUL byte in the first few kilobytes.
pub fn is_probably_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}
