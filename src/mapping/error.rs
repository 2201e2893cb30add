//! Configuration errors raised while building or applying a mapping table.

use std::fmt;

/// A column mapping table that cannot serve its schema.
///
/// These are programmer or configuration mistakes, never data problems, and
/// are not retried. They travel inside `eyre::Report`; recover the typed error
/// with `report.downcast_ref::<MappingError>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    InvalidSpec {
        entry: String,
        reason: String,
    },
    DuplicateRowId {
        first: usize,
        second: usize,
    },
    FieldCountMismatch {
        mappings: usize,
        fields: usize,
    },
    Unsupported {
        field_index: usize,
        mapping_spec: String,
        field_type: String,
    },
}

impl MappingError {
    /// Schema position the error is tied to, when there is one.
    pub fn field_index(&self) -> Option<usize> {
        match self {
            MappingError::DuplicateRowId { second, .. } => Some(*second),
            MappingError::Unsupported { field_index, .. } => Some(*field_index),
            MappingError::InvalidSpec { .. } | MappingError::FieldCountMismatch { .. } => None,
        }
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::InvalidSpec { entry, reason } => {
                write!(f, "invalid column mapping '{}': {}", entry, reason)
            }
            MappingError::DuplicateRowId { first, second } => write!(
                f,
                "row id mapped more than once: fields {} and {}",
                first, second
            ),
            MappingError::FieldCountMismatch { mappings, fields } => write!(
                f,
                "column mapping table has {} entries but the schema has {} fields",
                mappings, fields
            ),
            MappingError::Unsupported {
                field_index,
                mapping_spec,
                field_type,
            } => write!(
                f,
                "cannot process column mapping '{}' at offset {} for field of type {}",
                mapping_spec, field_index, field_type
            ),
        }
    }
}

impl std::error::Error for MappingError {}
