//! Fuzz testing for lazy row decoding.
//!
//! Feeds arbitrary cells and row ids through a fixed scalar/map/row-id
//! layout in both encodings to ensure malformed payloads surface as errors
//! rather than panics.

#![no_main]

use std::sync::Arc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use widerow::{
    ColumnEncoding, ColumnMappings, DataType, DelimitedRowIdFactory, FieldDef, FieldType,
    LazyRow, RowSchema, WideRecord,
};

#[derive(Debug, Arbitrary)]
struct RowInput {
    scalar_type: FuzzDataType,
    key_type: FuzzDataType,
    value_type: FuzzDataType,
    row_id_parts: Vec<FuzzDataType>,
    binary: bool,
    row_id: Vec<u8>,
    cells: Vec<(u8, Vec<u8>, Vec<u8>)>,
}

#[derive(Debug, Arbitrary, Clone, Copy)]
enum FuzzDataType {
    Bool,
    Int1,
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Text,
    Blob,
}

impl From<FuzzDataType> for DataType {
    fn from(fdt: FuzzDataType) -> Self {
        match fdt {
            FuzzDataType::Bool => DataType::Bool,
            FuzzDataType::Int1 => DataType::Int1,
            FuzzDataType::Int2 => DataType::Int2,
            FuzzDataType::Int4 => DataType::Int4,
            FuzzDataType::Int8 => DataType::Int8,
            FuzzDataType::Float4 => DataType::Float4,
            FuzzDataType::Float8 => DataType::Float8,
            FuzzDataType::Text => DataType::Text,
            FuzzDataType::Blob => DataType::Blob,
        }
    }
}

const FAMILIES: [&str; 3] = ["cf", "m", "x"];

fuzz_target!(|input: RowInput| {
    if input.cells.len() > 256 || input.row_id_parts.len() > 16 {
        return;
    }

    let row_id_type = if input.row_id_parts.is_empty() {
        FieldType::Primitive(DataType::Text)
    } else {
        FieldType::Struct(input.row_id_parts.iter().map(|&t| t.into()).collect())
    };
    let schema = Arc::new(RowSchema::new(vec![
        FieldDef::new("scalar", DataType::from(input.scalar_type)),
        FieldDef::new(
            "map",
            FieldType::map(input.key_type.into(), input.value_type.into()),
        ),
        FieldDef::new("id", row_id_type),
    ]));

    let encoding = if input.binary {
        ColumnEncoding::Binary
    } else {
        ColumnEncoding::Text
    };
    let Ok(mappings) = ColumnMappings::parse("cf:q,m:*,:rowid", encoding) else {
        return;
    };

    let mut record = WideRecord::new(input.row_id);
    for (family, qualifier, value) in input.cells {
        record.put(FAMILIES[family as usize % FAMILIES.len()], qualifier, value);
    }

    let mut row = LazyRow::new(schema);
    row.bind(
        record,
        Arc::new(mappings),
        Arc::new(DelimitedRowIdFactory::new(b'_')),
    );
    for index in 0..3 {
        let _ = row.get_field(index);
    }
    let _ = row.get_fields();
});
