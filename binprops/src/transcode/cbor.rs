//! CBOR transcoding: render parsed props as CBOR binary data.
//!
//! Mapping:
//!   - Value::Null    -> CBOR null (simple value 22)
//!   - Value::Bool    -> CBOR bool (simple values 20/21)
//!   - Value::Integer -> CBOR integer (smallest encoding that fits)
//!   - Value::Float   -> CBOR float (smallest width that is exact)
//!   - Value::String  -> CBOR text string
//!   - Value::Object  -> CBOR map with text keys, in document order
//!
//! Integers that exceed CBOR's native integer range (-2^64 to 2^64-1)
//! produce an error rather than using bignum tags.

use ciborium::value::{Integer, Value as CborValue};
use libprops::Value;
use num_traits::ToPrimitive;

/// Encode a Value as CBOR bytes.
pub fn encode(value: &Value) -> Result<Vec<u8>, String> {
    let cbor = value_to_cbor(value)?;
    let mut buf = Vec::new();
    ciborium::ser::into_writer(&cbor, &mut buf)
        .map_err(|e| format!("CBOR encode error: {}", e))?;
    Ok(buf)
}

fn value_to_cbor(value: &Value) -> Result<CborValue, String> {
    match value {
        Value::Null => Ok(CborValue::Null),
        Value::Bool(b) => Ok(CborValue::Bool(*b)),
        Value::Integer(n) => n
            .to_i128()
            .and_then(|i| Integer::try_from(i).ok())
            .map(CborValue::Integer)
            .ok_or_else(|| {
                format!(
                    "integer {} exceeds CBOR's native integer range (-2^64 to 2^64-1)",
                    n
                )
            }),
        Value::Float(f) => Ok(CborValue::Float(*f)),
        Value::String(s) => Ok(CborValue::Text(s.clone())),
        Value::Object(obj) => {
            let mut pairs = Vec::with_capacity(obj.len());
            for (k, v) in obj {
                pairs.push((CborValue::Text(k.clone()), value_to_cbor(v)?));
            }
            Ok(CborValue::Map(pairs))
        }
    }
}
