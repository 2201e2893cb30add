//! # Encoding Module
//!
//! This module provides the scalar byte-decoding primitives for widerow. A
//! cell value is interpreted according to the `ColumnEncoding` of its mapping:
//!
//! - **Text encoding**: UTF-8 literals (`"42"`, `"true"`, `"3.5"`)
//! - **Binary encoding**: Fixed-width big-endian values (`[0, 0, 0, 42]`)
//!
//! Text and blob types are read identically in both encodings.

pub mod binary;
pub mod text;

use eyre::Result;

use crate::config::{BINARY_ENCODING_CODES, DEFAULT_COLUMN_ENCODING, TEXT_ENCODING_CODES};
use crate::types::{DataType, Value};

/// Byte layout of a mapped cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnEncoding {
    Text,
    Binary,
}

impl Default for ColumnEncoding {
    fn default() -> Self {
        DEFAULT_COLUMN_ENCODING
    }
}

impl ColumnEncoding {
    /// Parses an encoding code from a mapping spec suffix.
    pub fn from_code(code: &str) -> Result<Self> {
        let lowered = code.trim().to_ascii_lowercase();
        if TEXT_ENCODING_CODES.contains(&lowered.as_str()) {
            Ok(ColumnEncoding::Text)
        } else if BINARY_ENCODING_CODES.contains(&lowered.as_str()) {
            Ok(ColumnEncoding::Binary)
        } else {
            eyre::bail!("unknown column encoding code '{}'", code)
        }
    }

    /// Short code used when rendering a mapping spec.
    pub fn code(&self) -> &'static str {
        match self {
            ColumnEncoding::Text => TEXT_ENCODING_CODES[0],
            ColumnEncoding::Binary => BINARY_ENCODING_CODES[0],
        }
    }
}

/// Decodes one primitive value from a cell's bytes.
pub fn decode_primitive(
    data_type: DataType,
    encoding: ColumnEncoding,
    bytes: &[u8],
) -> Result<Value> {
    match encoding {
        ColumnEncoding::Text => text::decode(data_type, bytes),
        ColumnEncoding::Binary => binary::decode(data_type, bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_codes_accept_short_and_long_forms() {
        assert_eq!(ColumnEncoding::from_code("s").unwrap(), ColumnEncoding::Text);
        assert_eq!(
            ColumnEncoding::from_code("String").unwrap(),
            ColumnEncoding::Text
        );
        assert_eq!(
            ColumnEncoding::from_code("b").unwrap(),
            ColumnEncoding::Binary
        );
        assert_eq!(
            ColumnEncoding::from_code("BINARY").unwrap(),
            ColumnEncoding::Binary
        );
        assert!(ColumnEncoding::from_code("x").is_err());
    }

    #[test]
    fn decode_primitive_dispatches_on_encoding() {
        assert_eq!(
            decode_primitive(DataType::Int4, ColumnEncoding::Text, b"42").unwrap(),
            Value::Int(42)
        );
        assert_eq!(
            decode_primitive(DataType::Int4, ColumnEncoding::Binary, &42i32.to_be_bytes())
                .unwrap(),
            Value::Int(42)
        );
    }
}
