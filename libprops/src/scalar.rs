//! Scalar typing for assignment values.
//!
//! Values in props.txt files are unquoted, so a token is typed by trying, in
//! order: boolean/null spellings, integer, float. Whatever fails all three is
//! kept as a string, which makes [`auto_convert`] total.

use crate::error::{ParseError, Result};
use crate::value::Value;
use num_bigint::BigInt;

/// Convert a trimmed token to the first typed form it matches.
pub fn auto_convert(token: &str) -> Value {
    if let Ok(value) = parse_literal(token) {
        return value;
    }
    if let Some(n) = parse_integer(token) {
        return Value::Integer(n);
    }
    if let Some(f) = parse_float(token) {
        return Value::Float(f);
    }
    Value::String(token.to_string())
}

/// Match `true`, `false`, `none` or `null`, ignoring case.
pub fn parse_literal(token: &str) -> Result<Value> {
    if token.eq_ignore_ascii_case("true") {
        Ok(Value::Bool(true))
    } else if token.eq_ignore_ascii_case("false") {
        Ok(Value::Bool(false))
    } else if token.eq_ignore_ascii_case("none") || token.eq_ignore_ascii_case("null") {
        Ok(Value::Null)
    } else {
        Err(ParseError::UnrecognizedLiteral(token.to_string()))
    }
}

/// Parse a decimal integer with optional sign and `_` digit separators.
pub fn parse_integer(token: &str) -> Option<BigInt> {
    let digits = strip_digit_separators(token)?;
    let (negative, body) = split_sign(&digits);
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n = BigInt::parse_bytes(body.as_bytes(), 10)?;
    Some(if negative { -n } else { n })
}

/// Parse a float, accepting `inf`, `infinity` and `nan` in any case.
pub fn parse_float(token: &str) -> Option<f64> {
    let text = strip_digit_separators(token)?;
    text.parse::<f64>().ok()
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

/// Drop `_` separators; each must sit between two digits.
fn strip_digit_separators(s: &str) -> Option<String> {
    if !s.contains('_') {
        return Some(s.to_string());
    }
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let before_digit = chars.get(i + 1).map_or(false, |n| n.is_ascii_digit());
            if !(after_digit && before_digit) {
                return None;
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booleans_any_case() {
        for token in ["true", "True", "TRUE"] {
            assert_eq!(auto_convert(token), Value::Bool(true));
        }
        for token in ["false", "False", "FALSE"] {
            assert_eq!(auto_convert(token), Value::Bool(false));
        }
    }

    #[test]
    fn test_null_spellings() {
        for token in ["None", "none", "NONE", "null", "Null", "NULL"] {
            assert_eq!(auto_convert(token), Value::Null);
        }
    }

    #[test]
    fn test_literal_rejects_other_words() {
        assert_eq!(
            parse_literal("yes"),
            Err(ParseError::UnrecognizedLiteral("yes".to_string()))
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(auto_convert("12"), Value::from(12));
        assert_eq!(auto_convert("-3"), Value::from(-3));
        assert_eq!(auto_convert("+7"), Value::from(7));
        assert_eq!(auto_convert("007"), Value::from(7));
        assert_eq!(auto_convert("1_000"), Value::from(1000));
    }

    #[test]
    fn test_big_integer() {
        let value = auto_convert("123456789012345678901234567890");
        assert_eq!(
            value.as_integer().map(|n| n.to_string()),
            Some("123456789012345678901234567890".to_string())
        );
    }

    #[test]
    fn test_integer_preferred_over_float() {
        assert!(matches!(auto_convert("42"), Value::Integer(_)));
    }

    #[test]
    fn test_floats() {
        assert_eq!(auto_convert("1.5"), Value::Float(1.5));
        assert_eq!(auto_convert("-0.25"), Value::Float(-0.25));
        assert_eq!(auto_convert(".5"), Value::Float(0.5));
        assert_eq!(auto_convert("1e3"), Value::Float(1000.0));
        assert_eq!(auto_convert("inf"), Value::Float(f64::INFINITY));
        assert_eq!(auto_convert("-Infinity"), Value::Float(f64::NEG_INFINITY));
        assert!(auto_convert("nan").as_float().unwrap().is_nan());
    }

    #[test]
    fn test_strings_fall_through() {
        assert_eq!(auto_convert("Emissive Color"), Value::from("Emissive Color"));
        assert_eq!(auto_convert("BLEND_Opaque (0)"), Value::from("BLEND_Opaque (0)"));
        assert_eq!(auto_convert("1.5.2"), Value::from("1.5.2"));
        assert_eq!(auto_convert(""), Value::from(""));
    }

    #[test]
    fn test_non_ascii_digits_stay_strings() {
        assert_eq!(auto_convert("\u{ff11}\u{ff12}"), Value::from("\u{ff11}\u{ff12}"));
        assert_eq!(auto_convert("\u{0661}.\u{0665}"), Value::from("\u{0661}.\u{0665}"));
    }

    #[test]
    fn test_misplaced_separators() {
        assert_eq!(parse_integer("_1"), None);
        assert_eq!(parse_integer("1_"), None);
        assert_eq!(parse_integer("1__0"), None);
        assert_eq!(auto_convert("Tex_01"), Value::from("Tex_01"));
    }
}
