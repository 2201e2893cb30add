use std::sync::Arc;

use eyre::{Result, WrapErr};
use smallvec::SmallVec;
use tracing::{debug, error, trace};

use super::state::DecoderState;
use crate::config::INLINE_ROW_FIELDS;
use crate::decoder::{FieldDecoder, RowIdFactory};
use crate::mapping::{ColumnMapping, ColumnMappings, MappingError};
use crate::records::RawRecord;
use crate::types::{RowSchema, Value};

/// Borrowed view of every field of a row, index-aligned with the schema.
pub type FieldList<'a> = SmallVec<[Option<&'a Value>; INLINE_ROW_FIELDS]>;

/// A schema-shaped row over one bound raw record, decoded field by field on
/// demand.
#[derive(Debug)]
pub struct LazyRow<R> {
    schema: Arc<RowSchema>,
    record: Option<R>,
    mappings: Option<Arc<ColumnMappings>>,
    row_id_factory: Option<Arc<dyn RowIdFactory>>,
    states: Option<Vec<DecoderState>>,
    initialized: Vec<bool>,
    parsed: bool,
}

impl<R: RawRecord> LazyRow<R> {
    pub fn new(schema: Arc<RowSchema>) -> Self {
        let field_count = schema.field_count();
        Self {
            schema,
            record: None,
            mappings: None,
            row_id_factory: None,
            states: None,
            initialized: vec![false; field_count],
            parsed: false,
        }
    }

    /// Rebinds the row to `record`. Nothing is decoded until a field is read.
    pub fn bind(
        &mut self,
        record: R,
        mappings: Arc<ColumnMappings>,
        row_id_factory: Arc<dyn RowIdFactory>,
    ) {
        let same_mappings = self
            .mappings
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &mappings));
        let same_factory = self
            .row_id_factory
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &row_id_factory));
        if !(same_mappings && same_factory) {
            self.states = None;
        }

        self.record = Some(record);
        self.mappings = Some(mappings);
        self.row_id_factory = Some(row_id_factory);
        self.parsed = false;
    }

    /// Returns the value of field `index`, decoding it on first read.
    ///
    /// `Ok(None)` means the bound record has no cell for a scalar field.
    ///
    /// # Panics
    ///
    /// Panics if `index >= schema.field_count()`.
    pub fn get_field(&mut self, index: usize) -> Result<Option<&Value>> {
        if !self.parsed {
            self.parse()?;
        }
        self.unchecked_field(index)
    }

    pub fn get_field_by_name(&mut self, name: &str) -> Result<Option<&Value>> {
        let index = self
            .schema
            .index_of(name)
            .ok_or_else(|| eyre::eyre!("no field named '{}' in row schema", name))?;
        self.get_field(index)
    }

    /// Returns every field in schema order, decoding the ones not yet read.
    ///
    /// The list borrows from this row, so it is invalidated by the next call
    /// that mutates the row (any read or `bind`). Use `to_values` for a
    /// snapshot that outlives it.
    pub fn get_fields(&mut self) -> Result<FieldList<'_>> {
        if !self.parsed {
            self.parse()?;
        }
        let field_count = self.schema.field_count();
        for index in 0..field_count {
            self.unchecked_field(index)?;
        }
        Ok((0..field_count).map(|i| self.cached_field(i)).collect())
    }

    /// Owned copy of every field in schema order.
    pub fn to_values(&mut self) -> Result<Vec<Option<Value>>> {
        Ok(self.get_fields()?.into_iter().map(|v| v.cloned()).collect())
    }

    pub fn schema(&self) -> &RowSchema {
        &self.schema
    }

    pub fn mappings(&self) -> Option<&ColumnMappings> {
        self.mappings.as_deref()
    }

    pub fn record(&self) -> Option<&R> {
        self.record.as_ref()
    }

    /// Mutable access to the bound record. Fields already decoded keep their
    /// cached values; only uncached fields observe the change.
    pub fn record_mut(&mut self) -> Option<&mut R> {
        self.record.as_mut()
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// True if field `index` holds a decoded value for the bound record.
    pub fn is_cached(&self, index: usize) -> bool {
        self.parsed && self.initialized[index]
    }

    fn parse(&mut self) -> Result<()> {
        if self.states.is_none() {
            match self.build_states() {
                Ok(states) => self.states = Some(states),
                Err(err) => {
                    error!(error = %err, "failed to build decoder states");
                    return Err(err);
                }
            }
        }
        self.initialized.fill(false);
        self.parsed = true;
        Ok(())
    }

    fn build_states(&self) -> Result<Vec<DecoderState>> {
        let (Some(mappings), Some(row_id_factory)) =
            (self.mappings.as_deref(), self.row_id_factory.as_deref())
        else {
            eyre::bail!("lazy row is not bound to a record");
        };

        if mappings.len() != self.schema.field_count() {
            return Err(MappingError::FieldCountMismatch {
                mappings: mappings.len(),
                fields: self.schema.field_count(),
            }
            .into());
        }

        let states = self
            .schema
            .fields()
            .iter()
            .zip(mappings.iter())
            .enumerate()
            .map(|(i, (field, mapping))| {
                DecoderState::for_field(i, mapping, field.field_type(), row_id_factory)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(fields = states.len(), "built decoder states");
        Ok(states)
    }

    fn unchecked_field(&mut self, index: usize) -> Result<Option<&Value>> {
        let (Some(record), Some(mappings), Some(states)) = (
            self.record.as_ref(),
            self.mappings.as_deref(),
            self.states.as_mut(),
        ) else {
            eyre::bail!("lazy row is not bound to a record");
        };

        let state = &mut states[index];
        if !self.initialized[index] {
            let mapping = &mappings[index];
            let decoded = match (mapping, &mut *state) {
                (ColumnMapping::Map(map), DecoderState::Map(decoder)) => decoder.init(record, map),
                (ColumnMapping::RowId(_), DecoderState::RowId(decoder)) => {
                    decoder.init(record.row_id())
                }
                (ColumnMapping::Scalar(scalar), DecoderState::Scalar(decoder)) => {
                    match record.value(&scalar.family, &scalar.qualifier) {
                        Some(bytes) => decoder.init(bytes),
                        None => {
                            trace!(field = index, mapping = %mapping.spec(), "no cell for field");
                            return Ok(None);
                        }
                    }
                }
                (mapping, _) => {
                    let err = mapping.unsupported(index, self.schema.field(index).field_type());
                    error!(
                        field_index = index,
                        mapping = %mapping.spec(),
                        "cannot process column mapping"
                    );
                    return Err(err.into());
                }
            };
            decoded.wrap_err_with(|| {
                format!("failed to decode field {} from '{}'", index, mapping.spec())
            })?;
            self.initialized[index] = true;
        }

        Ok(state.value())
    }

    fn cached_field(&self, index: usize) -> Option<&Value> {
        if !self.initialized[index] {
            return None;
        }
        self.states.as_ref().and_then(|states| states[index].value())
    }
}
