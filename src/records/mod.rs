//! # Raw Wide-Column Records
//!
//! This module defines the record interface the lazy row reads from. A raw
//! record is one row of a wide-column store: a row identifier plus a set of
//! cells, each addressed by column family and column qualifier.
//!
//! ## Record Shape
//!
//! ```text
//! row id: "row-007"
//! +--------+-----------+----------------+
//! | family | qualifier | value          |
//! +--------+-----------+----------------+
//! | cf     | q1        | 00 00 00 2a    |
//! | m      | k1        | v1             |
//! | m      | k2        | v2             |
//! +--------+-----------+----------------+
//! ```
//!
//! ## Lookups
//!
//! | Method | Used For |
//! |--------|----------|
//! | `row_id` | row-identifier fields |
//! | `value` | scalar fields, one (family, qualifier) cell |
//! | `qualifiers_and_values` | map fields, every cell of one family |
//!
//! The store's own retrieval layer implements `RawRecord` directly over its
//! scan buffers. `WideRecord` is an owned, in-memory implementation for tests,
//! tools, and callers that assemble rows themselves.
//!
//! ## Module Structure
//!
//! - `wide`: `Cell` and `WideRecord`

pub mod wide;

#[cfg(test)]
mod tests;

use std::rc::Rc;
use std::sync::Arc;

pub use wide::{Cell, WideRecord};

/// Source of cell bytes for one row.
pub trait RawRecord {
    /// Bytes of the row identifier.
    fn row_id(&self) -> &[u8];

    /// Value of the cell at (`family`, `qualifier`), if the row has one.
    fn value(&self, family: &[u8], qualifier: &[u8]) -> Option<&[u8]>;

    /// Every (qualifier, value) pair under `family`, in record order.
    fn qualifiers_and_values<'a>(
        &'a self,
        family: &'a [u8],
    ) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a;
}

impl<T: RawRecord + ?Sized> RawRecord for &T {
    fn row_id(&self) -> &[u8] {
        (**self).row_id()
    }

    fn value(&self, family: &[u8], qualifier: &[u8]) -> Option<&[u8]> {
        (**self).value(family, qualifier)
    }

    fn qualifiers_and_values<'a>(
        &'a self,
        family: &'a [u8],
    ) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a {
        (**self).qualifiers_and_values(family)
    }
}

impl<T: RawRecord + ?Sized> RawRecord for Box<T> {
    fn row_id(&self) -> &[u8] {
        (**self).row_id()
    }

    fn value(&self, family: &[u8], qualifier: &[u8]) -> Option<&[u8]> {
        (**self).value(family, qualifier)
    }

    fn qualifiers_and_values<'a>(
        &'a self,
        family: &'a [u8],
    ) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a {
        (**self).qualifiers_and_values(family)
    }
}

impl<T: RawRecord + ?Sized> RawRecord for Rc<T> {
    fn row_id(&self) -> &[u8] {
        (**self).row_id()
    }

    fn value(&self, family: &[u8], qualifier: &[u8]) -> Option<&[u8]> {
        (**self).value(family, qualifier)
    }

    fn qualifiers_and_values<'a>(
        &'a self,
        family: &'a [u8],
    ) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a {
        (**self).qualifiers_and_values(family)
    }
}

impl<T: RawRecord + ?Sized> RawRecord for Arc<T> {
    fn row_id(&self) -> &[u8] {
        (**self).row_id()
    }

    fn value(&self, family: &[u8], qualifier: &[u8]) -> Option<&[u8]> {
        (**self).value(family, qualifier)
    }

    fn qualifiers_and_values<'a>(
        &'a self,
        family: &'a [u8],
    ) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a {
        (**self).qualifiers_and_values(family)
    }
}
