//! Line scanning: splitting blocks into lines and finding `key = value`
//! assignments.
//!
//! A key is a run of letters, digits, whitespace, underscores and square
//! brackets directly before an `=`. The search is leftmost, so a line such as
//! `Parent = Material3'/Game/M.M'` yields `Parent`, while a line whose text
//! before `=` holds other characters yields only the run touching the `=`.

use once_cell::sync::Lazy;
use regex::Regex;

// `_` is a key character: `bOverride_BlendMode` is one key, not `BlendMode`.
static KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?P<key>[a-zA-Z\d_\[\]\s]+)=").unwrap());

/// Split block text into lines on `\n`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Extract the key of an assignment line, or `None` for structural lines
/// (blank lines, bare braces, or a key that trims to nothing).
pub fn line_key(line: &str) -> Option<&str> {
    let key = KEY.captures(line)?.name("key")?.as_str().trim();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Everything after the first `=` of the line, trimmed.
pub fn line_value(line: &str) -> &str {
    match line.split_once('=') {
        Some((_, rest)) => rest.trim(),
        None => "",
    }
}
