//! # Type System for widerow
//!
//! This module provides the declared types a row schema is written in and the
//! values fields decode to.
//!
//! ## Module Structure
//!
//! - `data_type`: Primitive `DataType` and declared `FieldType`
//! - `value`: Owned runtime `Value` and `MapValue`
//! - `column`: `FieldDef` and `RowSchema`
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `DataType` | Primitive type discriminant |
//! | `FieldType` | Declared shape of one field (primitive, map, struct) |
//! | `Value` | Decoded field value |
//! | `MapValue` | Ordered entries of a map field |
//! | `RowSchema` | Ordered field definitions of a row |

mod column;
mod data_type;
mod value;

pub use column::{FieldDef, RowSchema};
pub use data_type::{DataType, FieldType};
pub use value::{MapValue, Value};
