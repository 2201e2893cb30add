//! # Text Encoding
//!
//! Cell values written as UTF-8 literals. Integers are decimal with an optional
//! sign and are range-checked against the declared width, booleans are
//! `true`/`false` in any case, and floats accept anything `f64::from_str`
//! accepts (`1.5`, `-2e10`, `NaN`, `inf`). No whitespace is trimmed.
//!
//! | Type | Example bytes | Value |
//! |------|---------------|-------|
//! | bool | `TRUE` | `Bool(true)` |
//! | int2 | `-7` | `Int(-7)` |
//! | float8 | `2.5` | `Float(2.5)` |
//! | text | `abc` | `Text("abc")` |
//! | blob | any | `Blob(bytes)` |

use eyre::{Result, WrapErr};

use crate::types::{DataType, Value};

pub fn decode(data_type: DataType, bytes: &[u8]) -> Result<Value> {
    if data_type == DataType::Blob {
        return Ok(Value::Blob(bytes.to_vec()));
    }

    let s = std::str::from_utf8(bytes)
        .map_err(|e| eyre::eyre!("invalid UTF-8 in {} value: {}", data_type, e))?;

    match data_type {
        DataType::Bool => {
            if s.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if s.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                eyre::bail!("invalid bool literal '{}'", s)
            }
        }
        DataType::Int1 => parse_int::<i8>(s, data_type),
        DataType::Int2 => parse_int::<i16>(s, data_type),
        DataType::Int4 => parse_int::<i32>(s, data_type),
        DataType::Int8 => parse_int::<i64>(s, data_type),
        DataType::Float4 => {
            let f = s
                .parse::<f32>()
                .wrap_err_with(|| format!("invalid float4 literal '{}'", s))?;
            Ok(Value::Float(f as f64))
        }
        DataType::Float8 => {
            let f = s
                .parse::<f64>()
                .wrap_err_with(|| format!("invalid float8 literal '{}'", s))?;
            Ok(Value::Float(f))
        }
        DataType::Text => Ok(Value::Text(s.to_string())),
        DataType::Blob => Ok(Value::Blob(bytes.to_vec())),
    }
}

fn parse_int<T>(s: &str, data_type: DataType) -> Result<Value>
where
    T: std::str::FromStr + Into<i64>,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parsed = s
        .parse::<T>()
        .wrap_err_with(|| format!("invalid {} literal '{}'", data_type, s))?;
    Ok(Value::Int(parsed.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_integers_of_every_width() {
        assert_eq!(decode(DataType::Int1, b"-128").unwrap(), Value::Int(-128));
        assert_eq!(decode(DataType::Int2, b"300").unwrap(), Value::Int(300));
        assert_eq!(decode(DataType::Int4, b"42").unwrap(), Value::Int(42));
        assert_eq!(
            decode(DataType::Int8, b"9000000000").unwrap(),
            Value::Int(9_000_000_000)
        );
    }

    #[test]
    fn rejects_out_of_range_integer() {
        let err = decode(DataType::Int1, b"300").unwrap_err();
        assert!(err.to_string().contains("int1"));
    }

    #[test]
    fn rejects_non_numeric_integer() {
        assert!(decode(DataType::Int4, b"forty-two").is_err());
        assert!(decode(DataType::Int4, b"").is_err());
        assert!(decode(DataType::Int4, b" 42").is_err());
    }

    #[test]
    fn decodes_bool_case_insensitively() {
        assert_eq!(decode(DataType::Bool, b"TRUE").unwrap(), Value::Bool(true));
        assert_eq!(decode(DataType::Bool, b"false").unwrap(), Value::Bool(false));
        assert!(decode(DataType::Bool, b"yes").is_err());
    }

    #[test]
    fn decodes_floats() {
        assert_eq!(decode(DataType::Float8, b"2.5").unwrap(), Value::Float(2.5));
        assert_eq!(decode(DataType::Float4, b"0.5").unwrap(), Value::Float(0.5));
    }

    #[test]
    fn text_requires_utf8_but_blob_does_not() {
        assert!(decode(DataType::Text, &[0xff, 0xfe]).is_err());
        assert_eq!(
            decode(DataType::Blob, &[0xff, 0xfe]).unwrap(),
            Value::Blob(vec![0xff, 0xfe])
        );
        assert_eq!(
            decode(DataType::Text, b"row-007").unwrap(),
            Value::Text("row-007".to_string())
        );
    }
}
