//! Brace handling for nested blocks.
//!
//! A key with an empty value opens a block on the following lines:
//!
//! ```text
//! BasePropertyOverrides =
//! {
//!     TwoSided = false
//! }
//! ```
//!
//! [`capture_block`] collects the text up to the brace that balances the
//! first `{`, and [`strip_brackets`] peels exactly one `{...}` pair off a
//! span so the inside can be parsed on its own.

use crate::error::{ParseError, Result};

/// Text of a nested block as captured from the lines after its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedBlock {
    /// Every scanned character, with `\n` after each fully scanned line.
    pub text: String,
    /// Number of lines scanned, including the one holding the closing brace.
    pub lines_consumed: usize,
    /// Index (relative to the scanned lines) of the line with the first `{`.
    pub opening_line: usize,
}

/// Scan forward until the bracket depth returns to zero.
///
/// Depth is signed: a `}` seen before any `{` pushes it negative, and the scan
/// only stops once a `{` has been seen and the depth is back at zero.
pub fn capture_block(lines: &[&str]) -> Result<CapturedBlock> {
    let mut text = String::new();
    let mut opening_line = None;
    let mut depth: i64 = 0;

    for (i, line) in lines.iter().enumerate() {
        for ch in line.chars() {
            match ch {
                '{' => {
                    opening_line.get_or_insert(i);
                    depth += 1;
                }
                '}' => depth -= 1,
                _ => {}
            }
            text.push(ch);
            if let Some(opening_line) = opening_line {
                if depth == 0 {
                    return Ok(CapturedBlock {
                        text,
                        lines_consumed: i + 1,
                        opening_line,
                    });
                }
            }
        }
        text.push('\n');
    }

    Err(ParseError::UnclosedBracket(String::new()))
}

/// Remove one outer `{...}` pair from a span.
///
/// The span is trimmed, then everything through the first `{` and everything
/// from the last `}` on is dropped. A span with neither brace comes back
/// trimmed; a span with only one of them is an error.
pub fn strip_brackets(span: &str) -> Result<&str> {
    let trimmed = span.trim();

    let (opened, rest) = match trimmed.find('{') {
        Some(i) => (true, &trimmed[i + 1..]),
        None => (false, trimmed),
    };
    let (closed, inner) = match rest.rfind('}') {
        Some(i) => (true, &rest[..i]),
        None => (false, rest),
    };

    match (opened, closed) {
        (true, false) => Err(ParseError::MissingClosingBracket(
            span.to_string(),
            String::new(),
        )),
        (false, true) => Err(ParseError::MissingOpeningBracket(
            span.to_string(),
            String::new(),
        )),
        _ => Ok(inner),
    }
}
