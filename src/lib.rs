//! # widerow - Lazy Rows Over Wide-Column Records
//!
//! widerow presents a raw wide-column record (a row identifier plus cells
//! addressed by column family and qualifier) as a fixed-arity, typed row.
//! Each schema field is bound to one column mapping:
//!
//! - **scalar**: one cell at a fixed `family:qualifier`
//! - **map**: every cell of a family, qualifiers becoming map keys
//! - **row id**: the record's row identifier
//!
//! Nothing is decoded until a field is read. A decoded field is cached until
//! the row is bound to the next record, so a scan can reuse one `LazyRow`
//! and its decoders for every record it visits.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use widerow::{
//!     ColumnEncoding, ColumnMappings, DataType, DefaultRowIdFactory, FieldDef, FieldType,
//!     LazyRow, RowSchema, Value, WideRecord,
//! };
//!
//! let schema = Arc::new(RowSchema::new(vec![
//!     FieldDef::new("score", DataType::Int4),
//!     FieldDef::new("attrs", FieldType::map(DataType::Text, DataType::Text)),
//!     FieldDef::new("id", DataType::Text),
//! ]));
//! let mappings = Arc::new(ColumnMappings::parse("cf:q1#b,m:*,:rowid", ColumnEncoding::Text)?);
//! mappings.validate(&schema)?;
//!
//! let record = WideRecord::new("row-007")
//!     .with_cell("cf", "q1", 42i32.to_be_bytes())
//!     .with_cell("m", "k1", "v1");
//!
//! let mut row = LazyRow::new(schema);
//! row.bind(record, mappings, Arc::new(DefaultRowIdFactory::default()));
//!
//! assert_eq!(row.get_field(0)?, Some(&Value::Int(42)));
//! assert_eq!(row.get_field(2)?, Some(&Value::from("row-007")));
//! # Ok::<(), eyre::Report>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      row::LazyRow (get_field)        │
//! ├──────────────────┬──────────────────┤
//! │ mapping          │ decoder          │
//! │ (ColumnMappings) │ (scalar/map/rid) │
//! ├──────────────────┴──────────────────┤
//! │   encoding (text / binary bytes)     │
//! ├─────────────────────────────────────┤
//! │   records::RawRecord (wide cells)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`row`]: the lazy row and its per-field cache
//! - [`mapping`]: column mapping table and its text syntax
//! - [`decoder`]: field, map and row-id decoders
//! - [`encoding`]: text and binary primitive encodings
//! - [`records`]: the raw record abstraction and an owned implementation
//! - [`types`]: schema, field types and decoded values
//! - [`config`]: syntax tokens and sizing constants

pub mod config;
pub mod decoder;
pub mod encoding;
pub mod mapping;
pub mod records;
pub mod row;
pub mod types;

pub use decoder::{DefaultRowIdFactory, DelimitedRowIdFactory, FieldDecoder, RowIdFactory};
pub use encoding::ColumnEncoding;
pub use mapping::{ColumnMapping, ColumnMappings, MappingError};
pub use records::{RawRecord, WideRecord};
pub use row::{FieldList, LazyRow};
pub use types::{DataType, FieldDef, FieldType, MapValue, RowSchema, Value};
