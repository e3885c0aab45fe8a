//! YAML transcoding: render parsed props as YAML text.
//!
//! Mapping:
//!   - Value::Null     -> YAML null
//!   - Value::Bool     -> YAML bool
//!   - Value::Integer  -> YAML integer (as a string if beyond i64/u64)
//!   - Value::Float    -> YAML float (including .nan, .inf, -.inf)
//!   - Value::String   -> YAML string
//!   - Value::Object   -> YAML mapping, keys in document order

use libprops::Value;
use num_traits::ToPrimitive;

/// Encode a Value as a YAML string.
pub fn encode(value: &Value) -> Result<String, String> {
    let yaml_value = value_to_yaml(value);
    serde_yaml::to_string(&yaml_value).map_err(|e| format!("YAML encode error: {}", e))
}

fn value_to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Integer(n) => {
            if let Some(i) = n.to_i64() {
                serde_yaml::Value::Number(serde_yaml::Number::from(i))
            } else if let Some(u) = n.to_u64() {
                serde_yaml::Value::Number(serde_yaml::Number::from(u))
            } else {
                // YAML doesn't have native arbitrary-precision integers
                serde_yaml::Value::String(n.to_string())
            }
        }
        Value::Float(f) => serde_yaml::Value::Number(serde_yaml::Number::from(*f)),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Object(obj) => {
            let mut map = serde_yaml::Mapping::new();
            for (k, v) in obj {
                map.insert(serde_yaml::Value::String(k.clone()), value_to_yaml(v));
            }
            serde_yaml::Value::Mapping(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_nested_block() {
        let props = libprops::parse("TwoSided = false\nColor = { R=1, A=0.5 }\nTexture = None")
            .unwrap();
        let yaml = encode(&Value::Object(props)).unwrap();
        assert_eq!(yaml, "TwoSided: false\nColor:\n  R: 1\n  A: 0.5\nTexture: null\n");
    }

    #[test]
    fn test_encode_big_integer_as_string() {
        let props = libprops::parse("Big = 123456789012345678901234567890").unwrap();
        let yaml = encode(&Value::Object(props)).unwrap();
        assert_eq!(yaml, "Big: '123456789012345678901234567890'\n");
    }
}
