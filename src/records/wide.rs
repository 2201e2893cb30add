//! # WideRecord - In-Memory Raw Record
//!
//! `WideRecord` owns a row identifier and its cells in insertion order. Each
//! (family, qualifier) address holds at most one cell: `put` replaces the value
//! in place, so a map field over the family keeps the qualifier's original
//! position.
//!
//! Lookups are linear scans. Rows in a wide-column store rarely carry more
//! than a few dozen cells, and a scan over a contiguous `Vec` beats hashing at
//! that size.
//!
//! ## Usage
//!
//! ```ignore
//! let record = WideRecord::new("row-007")
//!     .with_cell("cf", "q1", 42i32.to_be_bytes())
//!     .with_cell("m", "k1", "v1");
//! assert_eq!(record.value(b"m", b"k1"), Some(&b"v1"[..]));
//! ```

use super::RawRecord;

/// One addressed value of a wide-column row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    family: Vec<u8>,
    qualifier: Vec<u8>,
    value: Vec<u8>,
}

impl Cell {
    pub fn new(
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            family: family.into(),
            qualifier: qualifier.into(),
            value: value.into(),
        }
    }

    pub fn family(&self) -> &[u8] {
        &self.family
    }

    pub fn qualifier(&self) -> &[u8] {
        &self.qualifier
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    fn is_at(&self, family: &[u8], qualifier: &[u8]) -> bool {
        self.family == family && self.qualifier == qualifier
    }
}

/// Owned wide-column row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WideRecord {
    row_id: Vec<u8>,
    cells: Vec<Cell>,
}

impl WideRecord {
    pub fn new(row_id: impl Into<Vec<u8>>) -> Self {
        Self {
            row_id: row_id.into(),
            cells: Vec::new(),
        }
    }

    pub fn with_cell(
        mut self,
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        self.push_cell(Cell::new(family, qualifier, value));
        self
    }

    /// Stores a cell, returning the value it replaced.
    pub fn put(
        &mut self,
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        self.push_cell(Cell::new(family, qualifier, value))
    }

    /// Removes the cell at (`family`, `qualifier`), returning its value.
    pub fn remove(&mut self, family: &[u8], qualifier: &[u8]) -> Option<Vec<u8>> {
        let pos = self.cells.iter().position(|c| c.is_at(family, qualifier))?;
        Some(self.cells.remove(pos).value)
    }

    /// Rebinds this record to a new row id, keeping the cell allocation.
    pub fn reset(&mut self, row_id: &[u8]) {
        self.row_id.clear();
        self.row_id.extend_from_slice(row_id);
        self.cells.clear();
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn push_cell(&mut self, cell: Cell) -> Option<Vec<u8>> {
        match self
            .cells
            .iter_mut()
            .find(|c| c.is_at(&cell.family, &cell.qualifier))
        {
            Some(existing) => Some(std::mem::replace(&mut existing.value, cell.value)),
            None => {
                self.cells.push(cell);
                None
            }
        }
    }
}

impl RawRecord for WideRecord {
    fn row_id(&self) -> &[u8] {
        &self.row_id
    }

    fn value(&self, family: &[u8], qualifier: &[u8]) -> Option<&[u8]> {
        self.cells
            .iter()
            .find(|c| c.is_at(family, qualifier))
            .map(|c| c.value.as_slice())
    }

    fn qualifiers_and_values<'a>(
        &'a self,
        family: &'a [u8],
    ) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a {
        self.cells
            .iter()
            .filter(move |c| c.family == family)
            .map(|c| (c.qualifier.as_slice(), c.value.as_slice()))
    }
}

impl FromIterator<Cell> for WideRecord {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut record = WideRecord::default();
        for cell in iter {
            record.push_cell(cell);
        }
        record
    }
}
