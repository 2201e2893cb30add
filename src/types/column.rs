//! # Field Definitions and Row Schema
//!
//! This module provides `FieldDef`, which pairs a field name with its declared
//! `FieldType`, and `RowSchema`, the ordered field list a `LazyRow` is built
//! for. Position in the schema is the field's slot in every materialized row.
//!
//! ## Usage
//!
//! ```ignore
//! use widerow::types::{DataType, FieldDef, FieldType, RowSchema};
//!
//! let schema = RowSchema::new(vec![
//!     FieldDef::new("id", DataType::Text),
//!     FieldDef::new("score", DataType::Int4),
//!     FieldDef::new("attrs", FieldType::map(DataType::Text, DataType::Text)),
//! ]);
//! assert_eq!(schema.index_of("score"), Some(1));
//! ```

use super::FieldType;

/// One named, typed field of a row schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    name: String,
    field_type: FieldType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }
}

/// Ordered field definitions of a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSchema {
    fields: Vec<FieldDef>,
}

impl RowSchema {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn field(&self, index: usize) -> &FieldDef {
        &self.fields[index]
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;

    #[test]
    fn schema_resolves_names_to_positions() {
        let schema = RowSchema::new(vec![
            FieldDef::new("id", DataType::Text),
            FieldDef::new("score", DataType::Int4),
        ]);

        assert_eq!(schema.field_count(), 2);
        assert_eq!(schema.index_of("score"), Some(1));
        assert_eq!(schema.index_of("nope"), None);
        assert_eq!(
            schema.field(1).field_type(),
            &FieldType::Primitive(DataType::Int4)
        );
    }
}
