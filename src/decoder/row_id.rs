//! # Row-Identifier Decoders
//!
//! The row-identifier field is decoded by whatever `RowIdFactory` the table
//! was configured with. The factory sees the field's declared type and the
//! encoding of the table's `:rowid` mapping, and returns a `FieldDecoder`; the
//! lazy row feeds it the record's identifier bytes.
//!
//! ## Provided Factories
//!
//! | Factory | Declared Types | Identifier Layout |
//! |---------|----------------|-------------------|
//! | `DefaultRowIdFactory` | primitive | the whole identifier is one value |
//! | `DelimitedRowIdFactory` | primitive, struct | components joined by a separator byte |
//!
//! ## Composite Identifiers
//!
//! ```text
//! identifier  "eu_2024_0042"      separator '_'
//! declared    struct<text,int4,int8>
//! value       Struct([Some("eu"), Some(2024), Some(42)])
//! ```
//!
//! Missing or empty components decode to `None`; components beyond the
//! declared arity are ignored. Splitting is byte-wise, so composite
//! identifiers are meant for text encoding: a binary component may contain
//! the separator byte.

use std::fmt;

use eyre::{Result, WrapErr};
use smallvec::SmallVec;

use super::{FieldDecoder, ScalarDecoder};
use crate::config::{DEFAULT_ROW_ID_SEPARATOR, INLINE_ROW_ID_PARTS};
use crate::encoding::{decode_primitive, ColumnEncoding};
use crate::types::{DataType, FieldType, Value};

/// Produces the decoder for a table's row-identifier field.
///
/// `encoding` is the encoding declared on the row-id mapping.
pub trait RowIdFactory: Send + Sync + fmt::Debug {
    fn create_decoder(
        &self,
        field_type: &FieldType,
        encoding: ColumnEncoding,
    ) -> Result<Box<dyn FieldDecoder>>;
}

/// Decodes the whole identifier as one primitive value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRowIdFactory;

impl RowIdFactory for DefaultRowIdFactory {
    fn create_decoder(
        &self,
        field_type: &FieldType,
        encoding: ColumnEncoding,
    ) -> Result<Box<dyn FieldDecoder>> {
        match field_type {
            FieldType::Primitive(data_type) => {
                Ok(Box::new(ScalarDecoder::new(*data_type, encoding)))
            }
            other => eyre::bail!("default row id factory cannot decode a {} row id", other),
        }
    }
}

/// Splits the identifier on a separator byte into struct components.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedRowIdFactory {
    separator: u8,
}

impl DelimitedRowIdFactory {
    pub fn new(separator: u8) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> u8 {
        self.separator
    }
}

impl Default for DelimitedRowIdFactory {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_ID_SEPARATOR)
    }
}

impl RowIdFactory for DelimitedRowIdFactory {
    fn create_decoder(
        &self,
        field_type: &FieldType,
        encoding: ColumnEncoding,
    ) -> Result<Box<dyn FieldDecoder>> {
        match field_type {
            FieldType::Primitive(data_type) => {
                Ok(Box::new(ScalarDecoder::new(*data_type, encoding)))
            }
            FieldType::Struct(parts) => Ok(Box::new(CompositeRowIdDecoder::new(
                parts.clone(),
                self.separator,
                encoding,
            ))),
            other => eyre::bail!("delimited row id factory cannot decode a {} row id", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompositeRowIdDecoder {
    parts: Vec<DataType>,
    separator: u8,
    encoding: ColumnEncoding,
    value: Option<Value>,
}

impl CompositeRowIdDecoder {
    pub fn new(parts: Vec<DataType>, separator: u8, encoding: ColumnEncoding) -> Self {
        Self {
            parts,
            separator,
            encoding,
            value: None,
        }
    }
}

impl FieldDecoder for CompositeRowIdDecoder {
    fn init(&mut self, bytes: &[u8]) -> Result<()> {
        self.value = None;

        let pieces: SmallVec<[&[u8]; INLINE_ROW_ID_PARTS]> = bytes
            .split(|b| *b == self.separator)
            .take(self.parts.len())
            .collect();

        let mut components = Vec::with_capacity(self.parts.len());
        for (i, data_type) in self.parts.iter().enumerate() {
            let component = match pieces.get(i) {
                Some(piece) if !piece.is_empty() => Some(
                    decode_primitive(*data_type, self.encoding, piece)
                        .wrap_err_with(|| format!("failed to decode row id component {}", i))?,
                ),
                _ => None,
            };
            components.push(component);
        }

        self.value = Some(Value::Struct(components));
        Ok(())
    }

    fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factory_decodes_primitive_ids() {
        let mut decoder = DefaultRowIdFactory
            .create_decoder(&FieldType::Primitive(DataType::Text), ColumnEncoding::Text)
            .unwrap();

        decoder.init(b"row-007").unwrap();
        assert_eq!(decoder.value(), Some(&Value::from("row-007")));
    }

    #[test]
    fn default_factory_rejects_struct_ids() {
        let err = DefaultRowIdFactory
            .create_decoder(&FieldType::Struct(vec![DataType::Text]), ColumnEncoding::Text)
            .unwrap_err();
        assert!(err.to_string().contains("struct<text>"));
    }

    #[test]
    fn factories_decode_with_the_requested_encoding() {
        let mut decoder = DefaultRowIdFactory
            .create_decoder(&FieldType::Primitive(DataType::Int4), ColumnEncoding::Binary)
            .unwrap();
        decoder.init(&42i32.to_be_bytes()).unwrap();
        assert_eq!(decoder.value(), Some(&Value::Int(42)));

        let mut decoder = DelimitedRowIdFactory::default()
            .create_decoder(
                &FieldType::Struct(vec![DataType::Int2, DataType::Text]),
                ColumnEncoding::Binary,
            )
            .unwrap();
        decoder.init(&[0x01, 0x02, b'_', b'e', b'u']).unwrap();
        assert_eq!(
            decoder.value(),
            Some(&Value::Struct(vec![
                Some(Value::Int(0x0102)),
                Some(Value::from("eu"))
            ]))
        );
    }

    #[test]
    fn delimited_factory_splits_components() {
        let factory = DelimitedRowIdFactory::default();
        let mut decoder = factory
            .create_decoder(
                &FieldType::Struct(vec![DataType::Text, DataType::Int4, DataType::Int8]),
                ColumnEncoding::Text,
            )
            .unwrap();

        decoder.init(b"eu_2024_0042").unwrap();
        assert_eq!(
            decoder.value(),
            Some(&Value::Struct(vec![
                Some(Value::from("eu")),
                Some(Value::Int(2024)),
                Some(Value::Int(42)),
            ]))
        );
    }

    #[test]
    fn delimited_factory_pads_missing_and_ignores_extra_components() {
        let factory = DelimitedRowIdFactory::new(b'|');
        let mut decoder = factory
            .create_decoder(
                &FieldType::Struct(vec![DataType::Text, DataType::Text]),
                ColumnEncoding::Text,
            )
            .unwrap();

        decoder.init(b"a").unwrap();
        assert_eq!(
            decoder.value(),
            Some(&Value::Struct(vec![Some(Value::from("a")), None]))
        );

        decoder.init(b"|b|c").unwrap();
        assert_eq!(
            decoder.value(),
            Some(&Value::Struct(vec![None, Some(Value::from("b"))]))
        );
    }

    #[test]
    fn delimited_factory_reports_bad_component() {
        let factory = DelimitedRowIdFactory::default();
        let mut decoder = factory
            .create_decoder(
                &FieldType::Struct(vec![DataType::Text, DataType::Int4]),
                ColumnEncoding::Text,
            )
            .unwrap();

        let err = decoder.init(b"eu_x").unwrap_err();
        assert!(err.to_string().contains("component 1"));
        assert_eq!(decoder.value(), None);
    }

    #[test]
    fn delimited_factory_rejects_map_ids() {
        let factory = DelimitedRowIdFactory::default();
        assert!(factory
            .create_decoder(
                &FieldType::map(DataType::Text, DataType::Text),
                ColumnEncoding::Text,
            )
            .is_err());
    }
}
