//! # Column Mapping Table
//!
//! This module describes where each schema field's bytes live in a raw record.
//! The table holds one `ColumnMapping` per schema field, in schema order, and
//! is immutable for the lifetime of the schema.
//!
//! ## Mapping Kinds
//!
//! | Kind | Payload | Source Of Bytes |
//! |------|---------|-----------------|
//! | `Scalar` | family, qualifier, encoding | one cell |
//! | `Map` | family, qualifier prefix, key/value encodings | every matching cell of the family |
//! | `RowId` | encoding | the record's row identifier |
//!
//! Kinds are a closed enum: decoders dispatch on them with exhaustive matches,
//! and the only configuration failure left is a kind that cannot serve the
//! field's declared type, reported as `MappingError::Unsupported`.
//!
//! ## Invariants
//!
//! - At most one field is a `RowId` mapping (`ColumnMappings::new` rejects a
//!   second one).
//! - The table length equals the schema's field count; checked by
//!   `ColumnMappings::validate` and again when a lazy row builds its decoders.
//!
//! ## Module Structure
//!
//! - `error`: `MappingError`
//! - `spec`: parser for the textual mapping form

mod error;
mod spec;

use eyre::Result;

use crate::config::{
    ENCODING_MARKER, FAMILY_SEPARATOR, MAP_ENCODING_SEPARATOR, MAP_WILDCARD, ROW_ID_TOKEN,
};
use crate::encoding::ColumnEncoding;
use crate::types::{FieldType, RowSchema};

pub use error::MappingError;

/// Fixed (family, qualifier) address of a scalar field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScalarMapping {
    pub family: Vec<u8>,
    pub qualifier: Vec<u8>,
    pub encoding: ColumnEncoding,
}

/// A family whose qualifiers become map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapMapping {
    pub family: Vec<u8>,
    pub qualifier_prefix: Vec<u8>,
    pub key_encoding: ColumnEncoding,
    pub value_encoding: ColumnEncoding,
}

impl MapMapping {
    pub fn matches(&self, qualifier: &[u8]) -> bool {
        qualifier.starts_with(&self.qualifier_prefix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowIdMapping {
    pub encoding: ColumnEncoding,
}

/// Where one schema field's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnMapping {
    Scalar(ScalarMapping),
    Map(MapMapping),
    RowId(RowIdMapping),
}

impl ColumnMapping {
    pub fn scalar(
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        encoding: ColumnEncoding,
    ) -> Self {
        ColumnMapping::Scalar(ScalarMapping {
            family: family.into(),
            qualifier: qualifier.into(),
            encoding,
        })
    }

    /// Map over every qualifier of `family`, keys and values in `encoding`.
    pub fn map(family: impl Into<Vec<u8>>, encoding: ColumnEncoding) -> Self {
        ColumnMapping::Map(MapMapping {
            family: family.into(),
            qualifier_prefix: Vec::new(),
            key_encoding: encoding,
            value_encoding: encoding,
        })
    }

    pub fn row_id(encoding: ColumnEncoding) -> Self {
        ColumnMapping::RowId(RowIdMapping { encoding })
    }

    /// Canonical textual form of this mapping, as accepted by
    /// `ColumnMappings::parse`.
    pub fn spec(&self) -> String {
        match self {
            ColumnMapping::Scalar(m) => format!(
                "{}{}{}{}{}",
                String::from_utf8_lossy(&m.family),
                FAMILY_SEPARATOR,
                String::from_utf8_lossy(&m.qualifier),
                ENCODING_MARKER,
                m.encoding.code()
            ),
            ColumnMapping::Map(m) => {
                let mut out = format!(
                    "{}{}{}{}{}",
                    String::from_utf8_lossy(&m.family),
                    FAMILY_SEPARATOR,
                    String::from_utf8_lossy(&m.qualifier_prefix),
                    MAP_WILDCARD,
                    ENCODING_MARKER,
                );
                out.push_str(m.key_encoding.code());
                if m.key_encoding != m.value_encoding {
                    out.push(MAP_ENCODING_SEPARATOR);
                    out.push_str(m.value_encoding.code());
                }
                out
            }
            ColumnMapping::RowId(m) => {
                format!("{}{}{}", ROW_ID_TOKEN, ENCODING_MARKER, m.encoding.code())
            }
        }
    }

    /// Checks that this mapping kind can produce a value of `field_type`.
    ///
    /// Row-id mappings accept any declared type here; whether the identifier
    /// can be decoded into it is the row-id factory's decision.
    pub fn check_field_type(&self, field_index: usize, field_type: &FieldType) -> Result<()> {
        let supported = matches!(
            (self, field_type),
            (ColumnMapping::Scalar(_), FieldType::Primitive(_))
                | (ColumnMapping::Map(_), FieldType::Map { .. })
                | (ColumnMapping::RowId(_), _)
        );
        if !supported {
            return Err(self.unsupported(field_index, field_type).into());
        }
        Ok(())
    }

    pub(crate) fn unsupported(&self, field_index: usize, field_type: &FieldType) -> MappingError {
        MappingError::Unsupported {
            field_index,
            mapping_spec: self.spec(),
            field_type: field_type.to_string(),
        }
    }
}

/// Ordered mapping table, one entry per schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMappings {
    mappings: Vec<ColumnMapping>,
    row_id_index: Option<usize>,
}

impl ColumnMappings {
    pub fn new(mappings: Vec<ColumnMapping>) -> Result<Self> {
        let mut row_id_index = None;
        for (i, mapping) in mappings.iter().enumerate() {
            if let ColumnMapping::RowId(_) = mapping {
                if let Some(first) = row_id_index {
                    return Err(MappingError::DuplicateRowId { first, second: i }.into());
                }
                row_id_index = Some(i);
            }
        }
        Ok(Self {
            mappings,
            row_id_index,
        })
    }

    /// Parses the textual mapping form, e.g. `:rowid,cf:q1#b,m:*`.
    pub fn parse(spec: &str, default_encoding: ColumnEncoding) -> Result<Self> {
        let mappings = spec::parse_mappings(spec, default_encoding)?;
        Self::new(mappings)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &ColumnMapping {
        &self.mappings[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.mappings.iter()
    }

    pub fn row_id_index(&self) -> Option<usize> {
        self.row_id_index
    }

    /// Checks table length and every mapping kind against `schema`.
    pub fn validate(&self, schema: &RowSchema) -> Result<()> {
        if self.mappings.len() != schema.field_count() {
            return Err(MappingError::FieldCountMismatch {
                mappings: self.mappings.len(),
                fields: schema.field_count(),
            }
            .into());
        }
        for (i, (mapping, field)) in self.mappings.iter().zip(schema.fields()).enumerate() {
            mapping.check_field_type(i, field.field_type())?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for ColumnMappings {
    type Output = ColumnMapping;

    fn index(&self, index: usize) -> &ColumnMapping {
        &self.mappings[index]
    }
}
