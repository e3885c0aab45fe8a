//! Error types for props.txt parsing.

use thiserror::Error;

/// Result type for props.txt parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying filename for error reporting.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    ///
    /// `line` is zero-based; the message shows it one-based.
    pub fn loc_suffix(&self, line: usize) -> String {
        match &self.filename {
            Some(name) => format!(" at {}:{}", name, line + 1),
            None => format!(" at line {}", line + 1),
        }
    }
}

/// Error type for props.txt parsing.
///
/// The trailing `String` of each variant holds the location suffix, filled in
/// by [`ParseError::with_location`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// End of input reached before a nested block's braces balanced.
    #[error("Bracket not closed{0}")]
    UnclosedBracket(String),

    /// A span had a closing brace but no opening one.
    #[error("Opening bracket missing in \"{0}\"{1}")]
    MissingOpeningBracket(String, String),

    /// A span had an opening brace but no closing one.
    #[error("Closing bracket missing in \"{0}\"{1}")]
    MissingClosingBracket(String, String),

    /// Token is none of the boolean or null spellings.
    #[error("Not a boolean or null literal: \"{0}\"")]
    UnrecognizedLiteral(String),

    /// A comma-separated part of an inline block has no `=`.
    #[error("Expected key=value in inline block, got \"{0}\"{1}")]
    MalformedInlineAssignment(String, String),
}

impl ParseError {
    /// Create an error with location information.
    pub fn with_location(self, ctx: &ParseContext, line: usize) -> Self {
        let suffix = ctx.loc_suffix(line);
        match self {
            ParseError::UnclosedBracket(_) => ParseError::UnclosedBracket(suffix),
            ParseError::MissingOpeningBracket(span, _) => {
                ParseError::MissingOpeningBracket(span, suffix)
            }
            ParseError::MissingClosingBracket(span, _) => {
                ParseError::MissingClosingBracket(span, suffix)
            }
            ParseError::UnrecognizedLiteral(token) => ParseError::UnrecognizedLiteral(token),
            ParseError::MalformedInlineAssignment(part, _) => {
                ParseError::MalformedInlineAssignment(part, suffix)
            }
        }
    }
}
