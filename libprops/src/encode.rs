//! Encode parsed values as JSON.
//!
//! Output follows the common `json.dumps` conventions so converted files
//! diff cleanly against ones produced by existing tooling:
//! - keys stay in document order
//! - non-ASCII characters are written as `\uXXXX` escapes
//! - non-finite floats are written as `NaN`, `Infinity`, `-Infinity`
//! - floats always carry a fraction or an exponent (`1.0`, `1e+16`)

use crate::Value;

/// Indentation width used by [`Format::Json`].
pub const DEFAULT_INDENT: usize = 4;

/// Output format for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty JSON, one entry per line, indented by [`DEFAULT_INDENT`].
    Json,
    /// Single-line JSON with `, ` and `: ` separators.
    JsonCompact,
}

/// Encode a value to a string in the specified format.
pub fn encode(value: &Value, format: Format) -> String {
    match format {
        Format::Json => encode_json(value, DEFAULT_INDENT),
        Format::JsonCompact => encode_json_compact(value),
    }
}

/// Encode a value as pretty JSON with `indent` spaces per level.
///
/// The result has no trailing newline.
pub fn encode_json(value: &Value, indent: usize) -> String {
    let mut out = String::new();
    write_pretty(&mut out, value, indent, 0);
    out
}

/// Encode a value as single-line JSON.
pub fn encode_json_compact(value: &Value) -> String {
    let mut out = String::new();
    write_compact(&mut out, value);
    out
}

fn write_pretty(out: &mut String, value: &Value, indent: usize, depth: usize) {
    match value {
        Value::Object(obj) if !obj.is_empty() => {
            let pad = " ".repeat(indent * depth);
            let pad1 = " ".repeat(indent * (depth + 1));
            out.push_str("{\n");
            for (i, (k, v)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&pad1);
                out.push_str(&encode_json_string(k));
                out.push_str(": ");
                write_pretty(out, v, indent, depth + 1);
            }
            out.push('\n');
            out.push_str(&pad);
            out.push('}');
        }
        _ => write_compact(out, value),
    }
}

fn write_compact(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::String(s) => out.push_str(&encode_json_string(s)),
        Value::Object(obj) => {
            out.push('{');
            for (i, (k, v)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&encode_json_string(k));
                out.push_str(": ");
                write_compact(out, v);
            }
            out.push('}');
        }
    }
}

/// Shortest round-trip float text, positional for exponents in `-4..16`
/// and scientific (`1.5e+16`, `1e-05`) otherwise.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "-1.2345e-7".
    let sci = format!("{:e}", f);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => (true, m),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if (-4..16).contains(&exp) {
        if exp >= 0 {
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                out.push_str(&digits);
                out.push_str(&"0".repeat(int_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        } else {
            out.push_str("0.");
            out.push_str(&"0".repeat((-exp - 1) as usize));
            out.push_str(&digits);
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.abs()));
    }
    out
}

fn encode_json_string(s: &str) -> String {
    let mut result = String::from("\"");
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0c' => result.push_str("\\f"),
            ' '..='~' => result.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    result.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
    }
    result.push('"');
    result
}
