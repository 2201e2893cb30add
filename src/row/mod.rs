//! # LazyRow - Deferred Row Materialization
//!
//! This module maps a raw wide-column record onto a fixed, schema-ordered row
//! without decoding anything up front. A field is decoded the first time it is
//! read and the result is kept until the row is bound to the next record.
//!
//! ## Lifecycle
//!
//! ```text
//! LazyRow::new(schema)                      once per schema
//!       │
//!       ▼
//! bind(record, mappings, row_id_factory)    per record: no decoding
//!       │
//!       ▼
//! get_field(i) / get_fields()               first read runs the parse pass:
//!       │                                     build decoders (first time only)
//!       │                                     clear the per-field cached flags
//!       ▼
//! decode field i on first read, then serve it from the decoder
//! ```
//!
//! Decoder states are built once and reused across records. Rebinding with a
//! different mapping table or row-id factory (by `Arc` identity) discards them
//! so they are rebuilt against the new table.
//!
//! ## Field Resolution
//!
//! | Mapping | Bytes | Result When Absent |
//! |---------|-------|--------------------|
//! | scalar | `record.value(family, qualifier)` | `None`, not cached |
//! | map | `record.qualifiers_and_values(family)` | empty map |
//! | row id | `record.row_id()` | n/a |
//!
//! A scalar miss is left uncached: the next read of that field
//! looks the cell up again, so a cell added to the bound record in between is
//! observed. Every successful decode is cached.
//!
//! ## Errors
//!
//! - A mapping that cannot serve its field's declared type fails the parse
//!   pass with `MappingError` and no field of the row is produced.
//! - A payload that does not decode fails that field's read with the field
//!   index and mapping spec attached; the field stays uncached.
//!
//! ## Thread Safety
//!
//! `LazyRow` is a single-owner cursor: every read takes `&mut self`. It is
//! `Send` whenever its record type is, so a row can be handed to another
//! thread, but it is never read from two threads at once. Separate rows may
//! share the same `Arc` schema, mapping table and factory.

mod lazy;
mod state;

pub use lazy::{FieldList, LazyRow};
