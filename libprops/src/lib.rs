//! Parser for props.txt material property dumps.
//!
//! props.txt files are the text form of an asset's properties as exported
//! by game asset tools. They are line oriented, with unquoted values and
//! brace-delimited nested blocks:
//!
//! ```text
//! VectorParameterValues[0] =
//! {
//!     ParameterName = Emissive Color
//!     ParameterValue = { R=1, G=1, B=1, A=0 }
//! }
//! FlattenedTexture = None
//! ```
//!
//! # Parsing Pipeline
//!
//! Each block is parsed line by line:
//!
//! 1. **Scanner**: Finds the key of each `key = value` line and skips
//!    structural lines (blank lines, bare braces).
//!
//! 2. **Block matcher**: For a key with an empty value, captures the
//!    following lines up to the balancing `}` and strips the outer braces.
//!
//! 3. **Block parser**: Recursively parses captured blocks, parses one-line
//!    `{ A=1, B=2 }` blocks, and types scalars as boolean, null, integer,
//!    float, or string.

mod block;
mod encode;
mod error;
mod parser;
mod scalar;
mod scanner;
mod value;

pub use block::{capture_block, strip_brackets, CapturedBlock};
pub use encode::{encode, encode_json, encode_json_compact, Format, DEFAULT_INDENT};
pub use error::{ParseContext, ParseError, Result};
pub use scalar::auto_convert;
pub use scanner::line_key;
pub use value::{Map, Value};

/// Parse a props.txt document from a string.
///
/// # Example
///
/// ```
/// use libprops::{parse, Value};
///
/// let props = parse("TwoSided = false").unwrap();
/// assert_eq!(props["TwoSided"], Value::Bool(false));
/// ```
pub fn parse(input: &str) -> Result<Map> {
    parse_with_filename(input, None)
}

/// Parse a props.txt document from a string with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Map> {
    let ctx = ParseContext::new(filename);
    parser::parse_root(input, &ctx)
}

/// Parse a props.txt document and encode it as four-space indented JSON.
pub fn to_json(input: &str) -> Result<String> {
    let props = parse(input)?;
    Ok(encode(&Value::Object(props), Format::Json))
}
