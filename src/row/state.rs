//! Per-field decoder slot, chosen by mapping kind when the row is first parsed.

use eyre::{Result, WrapErr};

use crate::decoder::{FieldDecoder, MapDecoder, RowIdFactory, ScalarDecoder};
use crate::mapping::ColumnMapping;
use crate::types::{FieldType, Value};

#[derive(Debug)]
pub(crate) enum DecoderState {
    Scalar(ScalarDecoder),
    Map(MapDecoder),
    RowId(Box<dyn FieldDecoder>),
}

impl DecoderState {
    pub(crate) fn for_field(
        field_index: usize,
        mapping: &ColumnMapping,
        field_type: &FieldType,
        row_id_factory: &dyn RowIdFactory,
    ) -> Result<Self> {
        match (mapping, field_type) {
            (ColumnMapping::RowId(row_id), _) => row_id_factory
                .create_decoder(field_type, row_id.encoding)
                .map(DecoderState::RowId)
                .wrap_err_with(|| mapping.unsupported(field_index, field_type)),
            (ColumnMapping::Map(_), FieldType::Map { key, value }) => {
                Ok(DecoderState::Map(MapDecoder::new(*key, *value)))
            }
            (ColumnMapping::Scalar(scalar), FieldType::Primitive(data_type)) => Ok(
                DecoderState::Scalar(ScalarDecoder::new(*data_type, scalar.encoding)),
            ),
            _ => Err(mapping.unsupported(field_index, field_type).into()),
        }
    }

    pub(crate) fn value(&self) -> Option<&Value> {
        match self {
            DecoderState::Scalar(decoder) => decoder.value(),
            DecoderState::Map(decoder) => decoder.value(),
            DecoderState::RowId(decoder) => decoder.value(),
        }
    }
}
