//! # MapDecoder - Qualifiers As Map Keys
//!
//! A map field gathers every cell of one column family whose qualifier starts
//! with the mapping's prefix. The qualifier bytes decode to the key, the cell
//! bytes to the value:
//!
//! ```text
//! family "m"                      map<text,text>
//! +-----------+-------+           +------+------+
//! | qualifier | value |           | key  | val  |
//! +-----------+-------+   ====>   +------+------+
//! | k1        | v1    |           | "k1" | "v1" |
//! | k2        | v2    |           | "k2" | "v2" |
//! +-----------+-------+           +------+------+
//! ```
//!
//! Entries keep record order. A qualifier seen twice keeps its first position
//! and takes the last value. A family with no matching cells yields an empty
//! map, never a missing value.
//!
//! Keys are the whole qualifier, prefix included: `m:tag_*` over qualifier
//! `tag_a` yields the key `"tag_a"`, so a key always names the cell it came
//! from.
//!
//! Construction does no work; the map is built by `init` against the bound
//! record and kept until the next `init`. `init` refills the previous map's
//! entry buffer in place. The duplicate-qualifier index borrows the record's
//! qualifiers, so it is rebuilt on every call.

use eyre::{Result, WrapErr};
use hashbrown::HashMap;

use crate::encoding::decode_primitive;
use crate::mapping::MapMapping;
use crate::records::RawRecord;
use crate::types::{DataType, MapValue, Value};

#[derive(Debug, Clone)]
pub struct MapDecoder {
    key_type: DataType,
    value_type: DataType,
    value: Option<Value>,
}

impl MapDecoder {
    pub fn new(key_type: DataType, value_type: DataType) -> Self {
        Self {
            key_type,
            value_type,
            value: None,
        }
    }

    /// Builds the map from `record`'s cells under `mapping`'s family.
    pub fn init<R: RawRecord>(&mut self, record: &R, mapping: &MapMapping) -> Result<()> {
        let mut map = match self.value.take() {
            Some(Value::Map(mut map)) => {
                map.clear();
                map
            }
            _ => MapValue::new(),
        };

        let mut positions: HashMap<&[u8], usize> = HashMap::new();
        for (qualifier, bytes) in record.qualifiers_and_values(&mapping.family) {
            if !mapping.matches(qualifier) {
                continue;
            }

            let value = decode_primitive(self.value_type, mapping.value_encoding, bytes)
                .wrap_err_with(|| {
                    format!(
                        "failed to decode map value for qualifier '{}'",
                        String::from_utf8_lossy(qualifier)
                    )
                })?;

            match positions.get(qualifier) {
                Some(&pos) => map.replace_value(pos, value),
                None => {
                    let key = decode_primitive(self.key_type, mapping.key_encoding, qualifier)
                        .wrap_err_with(|| {
                            format!(
                                "failed to decode map key '{}'",
                                String::from_utf8_lossy(qualifier)
                            )
                        })?;
                    positions.insert(qualifier, map.len());
                    map.push(key, value);
                }
            }
        }

        self.value = Some(Value::Map(map));
        Ok(())
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn map(&self) -> Option<&MapValue> {
        self.value.as_ref().and_then(Value::as_map)
    }
}
