//! Block parser
//!
//! Walks the lines of a block and builds a [`Map`]. Each assignment line is
//! one of three shapes:
//! - `Key =` with the block on the following lines, parsed recursively
//! - `Key = { A=1, B=2 }`, an inline block
//! - `Key = value`, a scalar

use crate::block::{capture_block, strip_brackets};
use crate::error::{ParseContext, ParseError, Result};
use crate::scalar::auto_convert;
use crate::scanner::{line_key, line_value, split_lines};
use crate::value::{Map, Value};

/// Parse the root block of a document.
pub fn parse_root(input: &str, ctx: &ParseContext) -> Result<Map> {
    parse_block(input, ctx, 0)
}

/// Parse a multi-line block whose first line is document line `first_line`.
pub fn parse_block(text: &str, ctx: &ParseContext, first_line: usize) -> Result<Map> {
    let lines = split_lines(text);
    let mut data = Map::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let line_num = first_line + i;
        i += 1;

        let Some(key) = line_key(line) else {
            continue;
        };
        let raw = line_value(line);

        let value = if raw.is_empty() {
            let block =
                capture_block(&lines[i..]).map_err(|e| e.with_location(ctx, line_num))?;
            log::debug!(
                "block {:?} at line {} spans {} lines",
                key,
                line_num + 1,
                block.lines_consumed
            );
            let inner_line = line_num + 1 + block.opening_line;
            i += block.lines_consumed;
            let inner = strip_brackets(&block.text).map_err(|e| e.with_location(ctx, line_num))?;
            Value::Object(parse_block(inner, ctx, inner_line)?)
        } else if raw.contains('{') {
            let body = strip_brackets(raw).map_err(|e| e.with_location(ctx, line_num))?;
            Value::Object(parse_inline(body, ctx, line_num)?)
        } else {
            auto_convert(raw)
        };

        log::trace!("line {}: {} = {:?}", line_num + 1, key, value);
        data.insert(key.to_string(), value);
    }

    Ok(data)
}

/// Parse the body of a one-line block, e.g. `R=1, G=1, B=1, A=0`.
///
/// Values are never nested here: `A={B=1}` keeps `{B=1}` as a string.
pub fn parse_inline(body: &str, ctx: &ParseContext, line_num: usize) -> Result<Map> {
    let mut data = Map::new();
    if body.trim().is_empty() {
        return Ok(data);
    }

    for part in body.split(',') {
        let (key, value) = part.split_once('=').ok_or_else(|| {
            ParseError::MalformedInlineAssignment(part.trim().to_string(), String::new())
                .with_location(ctx, line_num)
        })?;
        data.insert(key.trim().to_string(), auto_convert(value.trim()));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Result<Map> {
        parse_root(input, &ParseContext::new(None))
    }

    fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
        entries.into_iter().collect()
    }

    #[test]
    fn test_scalar_assignment() {
        let map = parse("ParameterName = Emissive Color").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["ParameterName"], Value::from("Emissive Color"));
    }

    #[test]
    fn test_inline_block() {
        let map = parse("ParameterValue = { R=1, G=1, B=1, A=0 }").unwrap();
        assert_eq!(
            Value::from(map),
            obj([(
                "ParameterValue",
                obj([
                    ("R", Value::from(1)),
                    ("G", Value::from(1)),
                    ("B", Value::from(1)),
                    ("A", Value::from(0)),
                ])
            )])
        );
    }

    #[test]
    fn test_inline_block_single_entry() {
        let map = parse("ParameterInfo = { Name=None }").unwrap();
        assert_eq!(map["ParameterInfo"], obj([("Name", Value::Null)]));
    }

    #[test]
    fn test_inline_empty_body() {
        let map = parse("Empty = {   }").unwrap();
        assert_eq!(map["Empty"], Value::Object(Map::new()));
    }

    #[test]
    fn test_inline_missing_equals() {
        let err = parse("\nColor = { R=1, G }").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedInlineAssignment("G".to_string(), " at line 2".to_string())
        );
    }

    #[test]
    fn test_inline_trailing_comma() {
        assert!(matches!(
            parse("Color = { R=1, }"),
            Err(ParseError::MalformedInlineAssignment(_, _))
        ));
    }

    #[test]
    fn test_inline_nested_value_stays_string() {
        let map = parse("Outer = { A={B=1} }").unwrap();
        assert_eq!(map["Outer"], obj([("A", Value::from("{B=1}"))]));
    }

    #[test]
    fn test_multiline_block_does_not_swallow_next_line() {
        let input = "\
BasePropertyOverrides =
{
    bOverride_BlendMode = false
    TwoSided = false
}
FlattenedTexture = None";
        let map = parse(input).unwrap();
        assert_eq!(
            Value::from(map),
            obj([
                (
                    "BasePropertyOverrides",
                    obj([
                        ("bOverride_BlendMode", Value::Bool(false)),
                        ("TwoSided", Value::Bool(false)),
                    ])
                ),
                ("FlattenedTexture", Value::Null),
            ])
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let map = parse("A = 1\r\nB =\r\n{\r\n  C = true\r\n}\r\nD = x\r\n").unwrap();
        assert_eq!(
            Value::from(map),
            obj([
                ("A", Value::from(1)),
                ("B", obj([("C", Value::Bool(true))])),
                ("D", Value::from("x")),
            ])
        );
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let map = parse("X = 1\nY = 5\nX = 2").unwrap();
        assert_eq!(map["X"], Value::from(2));
        assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), vec!["X", "Y"]);
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse("A = 1\nB =\n{\n  C = 2\n").unwrap_err();
        assert_eq!(err, ParseError::UnclosedBracket(" at line 2".to_string()));
    }

    #[test]
    fn test_block_key_on_last_line() {
        assert!(matches!(
            parse("Dangling ="),
            Err(ParseError::UnclosedBracket(_))
        ));
    }

    #[test]
    fn test_structural_lines_are_skipped() {
        let map = parse("\n}\n{\n\nA = 1\n").unwrap();
        assert_eq!(Value::from(map), obj([("A", Value::from(1))]));
    }

    #[test]
    fn test_deep_nesting_error_reports_absolute_line() {
        let input = "\
Outer =
{
    Inner =
    {
        Color = { R=1, oops }
    }
}";
        let err = parse(input).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedInlineAssignment("oops".to_string(), " at line 5".to_string())
        );
    }

    #[test]
    fn test_material_document() {
        let input = "\
VectorParameterValues[1] =
{
    VectorParameterValues[0] =
    {
        ParameterName = Emissive Color
        ParameterValue = { R=1, G=1, B=1, A=0 }
        ParameterInfo = { Name=None }
    }
}
Parent = Material3'/Game/Materials/Templates/M_Template.M_Template'
BasePropertyOverrides =
{
    bOverride_BlendMode = false
    BlendMode = BLEND_Opaque (0)
    bOverride_TwoSided = false
    TwoSided = false
    OpacityMaskClipValue = 0.3333
}
FlattenedTexture = None
";
        let expected = obj([
            (
                "VectorParameterValues[1]",
                obj([(
                    "VectorParameterValues[0]",
                    obj([
                        ("ParameterName", Value::from("Emissive Color")),
                        (
                            "ParameterValue",
                            obj([
                                ("R", Value::from(1)),
                                ("G", Value::from(1)),
                                ("B", Value::from(1)),
                                ("A", Value::from(0)),
                            ]),
                        ),
                        ("ParameterInfo", obj([("Name", Value::Null)])),
                    ]),
                )]),
            ),
            (
                "Parent",
                Value::from("Material3'/Game/Materials/Templates/M_Template.M_Template'"),
            ),
            (
                "BasePropertyOverrides",
                obj([
                    ("bOverride_BlendMode", Value::Bool(false)),
                    ("BlendMode", Value::from("BLEND_Opaque (0)")),
                    ("bOverride_TwoSided", Value::Bool(false)),
                    ("TwoSided", Value::Bool(false)),
                    ("OpacityMaskClipValue", Value::Float(0.3333)),
                ]),
            ),
            ("FlattenedTexture", Value::Null),
        ]);

        assert_eq!(Value::from(parse(input).unwrap()), expected);
    }
}
