//! # Mapping Spec Parser
//!
//! Parses the compact textual form of a column mapping table:
//!
//! ```text
//! spec    := entry (',' entry)*
//! entry   := ( ':rowid' | family ':' qualifier | family ':' prefix '*' ) suffix?
//! suffix  := '#' code | '#' code ':' code        (key:value form, maps only)
//! code    := 's' | 'string' | 'b' | 'binary'
//! ```
//!
//! Whitespace around entries is ignored. The encoding suffix is split at the
//! last `#`, so qualifiers may contain `#` only when a suffix follows.

use eyre::Result;

use super::{ColumnMapping, MapMapping, MappingError, RowIdMapping, ScalarMapping};
use crate::config::{
    ENCODING_MARKER, FAMILY_SEPARATOR, MAPPING_SEPARATOR, MAP_ENCODING_SEPARATOR, MAP_WILDCARD,
    ROW_ID_TOKEN,
};
use crate::encoding::ColumnEncoding;

pub(super) fn parse_mappings(
    spec: &str,
    default_encoding: ColumnEncoding,
) -> Result<Vec<ColumnMapping>> {
    if spec.trim().is_empty() {
        return Ok(Vec::new());
    }
    spec.split(MAPPING_SEPARATOR)
        .map(|entry| parse_entry(entry.trim(), default_encoding))
        .collect()
}

fn parse_entry(entry: &str, default_encoding: ColumnEncoding) -> Result<ColumnMapping> {
    if entry.is_empty() {
        return Err(invalid(entry, "empty mapping entry"));
    }

    let (body, codes) = match entry.rsplit_once(ENCODING_MARKER) {
        Some((body, codes)) => (body, Some(codes)),
        None => (entry, None),
    };

    if body.eq_ignore_ascii_case(ROW_ID_TOKEN) {
        let encoding = single_encoding(entry, codes, default_encoding)?;
        return Ok(ColumnMapping::RowId(RowIdMapping { encoding }));
    }

    let (family, qualifier) = body
        .split_once(FAMILY_SEPARATOR)
        .ok_or_else(|| invalid(entry, "expected family:qualifier"))?;
    if family.is_empty() {
        return Err(invalid(entry, "empty column family"));
    }

    if let Some(prefix) = qualifier.strip_suffix(MAP_WILDCARD) {
        let (key_encoding, value_encoding) = map_encodings(entry, codes, default_encoding)?;
        return Ok(ColumnMapping::Map(MapMapping {
            family: family.as_bytes().to_vec(),
            qualifier_prefix: prefix.as_bytes().to_vec(),
            key_encoding,
            value_encoding,
        }));
    }

    if qualifier.is_empty() {
        return Err(invalid(entry, "empty column qualifier"));
    }
    let encoding = single_encoding(entry, codes, default_encoding)?;
    Ok(ColumnMapping::Scalar(ScalarMapping {
        family: family.as_bytes().to_vec(),
        qualifier: qualifier.as_bytes().to_vec(),
        encoding,
    }))
}

fn single_encoding(
    entry: &str,
    codes: Option<&str>,
    default_encoding: ColumnEncoding,
) -> Result<ColumnEncoding> {
    match codes {
        None => Ok(default_encoding),
        Some(code) if code.contains(MAP_ENCODING_SEPARATOR) => Err(invalid(
            entry,
            "key:value encodings only apply to map mappings",
        )),
        Some(code) => encoding_code(entry, code),
    }
}

fn map_encodings(
    entry: &str,
    codes: Option<&str>,
    default_encoding: ColumnEncoding,
) -> Result<(ColumnEncoding, ColumnEncoding)> {
    match codes {
        None => Ok((default_encoding, default_encoding)),
        Some(codes) => match codes.split_once(MAP_ENCODING_SEPARATOR) {
            Some((key, value)) => Ok((encoding_code(entry, key)?, encoding_code(entry, value)?)),
            None => {
                let encoding = encoding_code(entry, codes)?;
                Ok((encoding, encoding))
            }
        },
    }
}

fn encoding_code(entry: &str, code: &str) -> Result<ColumnEncoding> {
    ColumnEncoding::from_code(code)
        .map_err(|_| invalid(entry, format!("unknown encoding '{}'", code)))
}

fn invalid(entry: &str, reason: impl Into<String>) -> eyre::Report {
    MappingError::InvalidSpec {
        entry: entry.to_string(),
        reason: reason.into(),
    }
    .into()
}
