//! TOML transcoding: render parsed props as TOML text.
//!
//! Mapping:
//!   - Value::Null      -> error (TOML has no null)
//!   - Value::Bool      -> TOML boolean
//!   - Value::Integer   -> TOML integer (if fits in i64, otherwise error)
//!   - Value::Float     -> TOML float
//!   - Value::String    -> TOML string
//!   - Value::Object    -> TOML table
//!
//! props.txt files routinely contain `None` values, so many real documents
//! cannot be represented; the error names the offending key.

use libprops::Value;
use toml_edit::DocumentMut;

/// Encode a Value as a TOML string.
pub fn encode(value: &Value) -> Result<String, String> {
    let Value::Object(obj) = value else {
        return Err("TOML requires the top-level value to be a table".to_string());
    };
    let mut doc = DocumentMut::new();
    for (key, v) in obj {
        doc.insert(key, value_to_toml(v, key)?);
    }
    Ok(doc.to_string())
}

fn value_to_toml(value: &Value, path: &str) -> Result<toml_edit::Item, String> {
    match value {
        Value::Null => Err(format!("TOML has no null type (at {})", path)),
        Value::Bool(b) => Ok(toml_edit::value(*b)),
        Value::Integer(n) => {
            let i = value
                .as_i64()
                .ok_or_else(|| format!("Integer {} too large for TOML (i64) (at {})", n, path))?;
            Ok(toml_edit::value(i))
        }
        Value::Float(f) => Ok(toml_edit::value(*f)),
        Value::String(s) => Ok(toml_edit::value(s.as_str())),
        Value::Object(obj) => {
            let mut table = toml_edit::Table::new();
            for (k, v) in obj {
                table.insert(k, value_to_toml(v, &format!("{}.{}", path, k))?);
            }
            Ok(toml_edit::Item::Table(table))
        }
    }
}
