//! # Binary Encoding
//!
//! Cell values written as fixed-width big-endian numbers, the layout a
//! `DataOutput`-style writer produces. The payload must be exactly the width of
//! the declared type; a short or long payload is a decode error rather than a
//! truncation.
//!
//! ```text
//! int4 42   => [0x00, 0x00, 0x00, 0x2a]
//! bool true => [0x01]          (any non-zero byte is true)
//! float8    => IEEE-754 bits, big-endian
//! ```
//!
//! Text and blob carry no length prefix: the whole cell is the value.

use eyre::Result;

use crate::types::{DataType, Value};

pub fn decode(data_type: DataType, bytes: &[u8]) -> Result<Value> {
    match data_type {
        DataType::Bool => {
            let [b] = fixed::<1>(data_type, bytes)?;
            Ok(Value::Bool(b != 0))
        }
        DataType::Int1 => Ok(Value::Int(
            i8::from_be_bytes(fixed::<1>(data_type, bytes)?) as i64,
        )),
        DataType::Int2 => Ok(Value::Int(
            i16::from_be_bytes(fixed::<2>(data_type, bytes)?) as i64,
        )),
        DataType::Int4 => Ok(Value::Int(
            i32::from_be_bytes(fixed::<4>(data_type, bytes)?) as i64,
        )),
        DataType::Int8 => Ok(Value::Int(i64::from_be_bytes(fixed::<8>(
            data_type, bytes,
        )?))),
        DataType::Float4 => Ok(Value::Float(
            f32::from_be_bytes(fixed::<4>(data_type, bytes)?) as f64,
        )),
        DataType::Float8 => Ok(Value::Float(f64::from_be_bytes(fixed::<8>(
            data_type, bytes,
        )?))),
        DataType::Text => {
            let s = std::str::from_utf8(bytes)
                .map_err(|e| eyre::eyre!("invalid UTF-8 in text value: {}", e))?;
            Ok(Value::Text(s.to_string()))
        }
        DataType::Blob => Ok(Value::Blob(bytes.to_vec())),
    }
}

fn fixed<const N: usize>(data_type: DataType, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| {
        eyre::eyre!(
            "expected {} bytes for binary {}, got {}",
            N,
            data_type,
            bytes.len()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_big_endian_integers() {
        assert_eq!(
            decode(DataType::Int4, &42i32.to_be_bytes()).unwrap(),
            Value::Int(42)
        );
        assert_eq!(
            decode(DataType::Int2, &(-2i16).to_be_bytes()).unwrap(),
            Value::Int(-2)
        );
        assert_eq!(decode(DataType::Int1, &[0xff]).unwrap(), Value::Int(-1));
        assert_eq!(
            decode(DataType::Int8, &i64::MIN.to_be_bytes()).unwrap(),
            Value::Int(i64::MIN)
        );
    }

    #[test]
    fn decodes_floats_and_bools() {
        assert_eq!(
            decode(DataType::Float8, &1.25f64.to_be_bytes()).unwrap(),
            Value::Float(1.25)
        );
        assert_eq!(
            decode(DataType::Float4, &0.5f32.to_be_bytes()).unwrap(),
            Value::Float(0.5)
        );
        assert_eq!(decode(DataType::Bool, &[7]).unwrap(), Value::Bool(true));
        assert_eq!(decode(DataType::Bool, &[0]).unwrap(), Value::Bool(false));
    }

    #[test]
    fn rejects_wrong_width() {
        let err = decode(DataType::Int4, &[0, 42]).unwrap_err();
        assert!(err.to_string().contains("expected 4 bytes"));
        assert!(decode(DataType::Int8, &[0; 9]).is_err());
        assert!(decode(DataType::Bool, &[]).is_err());
    }

    #[test]
    fn variable_types_take_the_whole_payload() {
        assert_eq!(
            decode(DataType::Text, b"v1").unwrap(),
            Value::Text("v1".to_string())
        );
        assert_eq!(decode(DataType::Blob, b"").unwrap(), Value::Blob(vec![]));
    }
}
