//! # Field Decoders
//!
//! This module turns located cell bytes into typed field values. Each schema
//! field gets one long-lived decoder that is re-initialized for every record
//! the lazy row is bound to; the decoder keeps the last value it produced.
//!
//! ## Decoder Kinds
//!
//! | Decoder | Input | Output |
//! |---------|-------|--------|
//! | `ScalarDecoder` | one cell's bytes | `Value` of a primitive type |
//! | `MapDecoder` | every matching cell of a family | `Value::Map` |
//! | row-id decoders | the row identifier bytes | primitive or `Value::Struct` |
//!
//! Row-id decoders come from a `RowIdFactory`, so the identifier composition
//! rule can vary per table without the lazy row knowing it.
//!
//! ## Module Structure
//!
//! - `map`: `MapDecoder`
//! - `row_id`: `RowIdFactory`, `DefaultRowIdFactory`, `DelimitedRowIdFactory`

pub mod map;
pub mod row_id;

use std::fmt;

use eyre::Result;

use crate::encoding::{decode_primitive, ColumnEncoding};
use crate::types::{DataType, Value};

pub use map::MapDecoder;
pub use row_id::{
    CompositeRowIdDecoder, DefaultRowIdFactory, DelimitedRowIdFactory, RowIdFactory,
};

/// Decoder for a field whose bytes arrive as one contiguous slice.
pub trait FieldDecoder: Send + fmt::Debug {
    /// Decodes `bytes`, replacing any previously held value.
    ///
    /// On error the decoder holds no value.
    fn init(&mut self, bytes: &[u8]) -> Result<()>;

    /// The value produced by the last successful `init`.
    fn value(&self) -> Option<&Value>;
}

/// Decoder for one primitive-typed cell.
#[derive(Debug, Clone)]
pub struct ScalarDecoder {
    data_type: DataType,
    encoding: ColumnEncoding,
    value: Option<Value>,
}

impl ScalarDecoder {
    pub fn new(data_type: DataType, encoding: ColumnEncoding) -> Self {
        Self {
            data_type,
            encoding,
            value: None,
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn encoding(&self) -> ColumnEncoding {
        self.encoding
    }
}

impl FieldDecoder for ScalarDecoder {
    fn init(&mut self, bytes: &[u8]) -> Result<()> {
        self.value = None;
        self.value = Some(decode_primitive(self.data_type, self.encoding, bytes)?);
        Ok(())
    }

    fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}
