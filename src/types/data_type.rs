//! # Declared Field Types
//!
//! This module provides `DataType`, the primitive type discriminant, and
//! `FieldType`, the declared type of one schema field.
//!
//! ## Type Categories
//!
//! | Category | Types | Binary Width |
//! |----------|-------|--------------|
//! | **Boolean** | Bool | 1 byte |
//! | **Integer** | Int1, Int2, Int4, Int8 | 1, 2, 4, 8 bytes |
//! | **Float** | Float4, Float8 | 4, 8 bytes |
//! | **Text** | Text | Variable |
//! | **Binary** | Blob | Variable |
//!
//! ## Field Shapes
//!
//! A field is either a single primitive, a map whose keys come from column
//! qualifiers, or a struct whose components come from a composite row
//! identifier:
//!
//! ```text
//! FieldType::Primitive(DataType::Int4)                 int4
//! FieldType::Map { key: Text, value: Int8 }            map<text,int8>
//! FieldType::Struct(vec![Text, Int4])                  struct<text,int4>
//! ```

use std::fmt;

/// Primitive type of a scalar cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
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

impl DataType {
    /// Lowercase declaration name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Int1 => "int1",
            DataType::Int2 => "int2",
            DataType::Int4 => "int4",
            DataType::Int8 => "int8",
            DataType::Float4 => "float4",
            DataType::Float8 => "float8",
            DataType::Text => "text",
            DataType::Blob => "blob",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared type of one schema field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Primitive(DataType),
    Map { key: DataType, value: DataType },
    Struct(Vec<DataType>),
}

impl FieldType {
    pub fn map(key: DataType, value: DataType) -> Self {
        FieldType::Map { key, value }
    }

    pub fn as_primitive(&self) -> Option<DataType> {
        match self {
            FieldType::Primitive(data_type) => Some(*data_type),
            _ => None,
        }
    }
}

impl From<DataType> for FieldType {
    fn from(data_type: DataType) -> Self {
        FieldType::Primitive(data_type)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Primitive(data_type) => write!(f, "{}", data_type),
            FieldType::Map { key, value } => write!(f, "map<{},{}>", key, value),
            FieldType::Struct(parts) => {
                f.write_str("struct<")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", part)?;
                }
                f.write_str(">")
            }
        }
    }
}
