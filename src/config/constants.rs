//! # widerow Configuration Constants
//!
//! This module centralizes the constants shared by the mapping-spec parser, the
//! scalar decoders, and the lazy row. Constants that depend on each other are
//! co-located and checked at compile time.
//!
//! ## Mapping Spec Syntax
//!
//! A column mapping table is written as one entry per schema field:
//!
//! ```text
//! :rowid,cf:q1#b,m:*,attrs:tag_*#s:b
//!   │      │  │   │        │     │
//!   │      │  │   │        │     └─> ENCODING_MARKER, key:value codes
//!   │      │  │   │        └─> qualifier prefix before MAP_WILDCARD
//!   │      │  │   └─> map mapping over every qualifier in family "m"
//!   │      │  └─> binary encoding
//!   │      └─> FAMILY_SEPARATOR between family and qualifier
//!   └─> ROW_ID_TOKEN
//! ```
//!
//! ## Critical Invariants
//!
//! 1. The syntax characters are pairwise distinct, otherwise an entry could
//!    not be split unambiguously.
//! 2. `INLINE_ROW_FIELDS >= INLINE_ROW_ID_PARTS` so a composite identifier
//!    never spills before the row it belongs to.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::config::{ROW_ID_TOKEN, MAP_WILDCARD};
//! ```

use crate::encoding::ColumnEncoding;

// ============================================================================
// MAPPING SPEC SYNTAX
// Characters that structure the textual column mapping table
// ============================================================================

/// Token naming the row-identifier pseudo-column. Matched case-insensitively.
pub const ROW_ID_TOKEN: &str = ":rowid";

/// Separates one field's mapping from the next.
pub const MAPPING_SEPARATOR: char = ',';

/// Separates column family from column qualifier.
pub const FAMILY_SEPARATOR: char = ':';

/// Trailing qualifier character that turns a mapping into a map mapping.
pub const MAP_WILDCARD: char = '*';

/// Introduces the encoding suffix of a mapping.
pub const ENCODING_MARKER: char = '#';

/// Separates key and value encoding codes in a map mapping suffix.
pub const MAP_ENCODING_SEPARATOR: char = ':';

const _: () = assert!(
    MAPPING_SEPARATOR != FAMILY_SEPARATOR
        && MAPPING_SEPARATOR != MAP_WILDCARD
        && MAPPING_SEPARATOR != ENCODING_MARKER
        && FAMILY_SEPARATOR != MAP_WILDCARD
        && FAMILY_SEPARATOR != ENCODING_MARKER
        && MAP_WILDCARD != ENCODING_MARKER,
    "mapping spec syntax characters must be distinct"
);

// ============================================================================
// ENCODING CODES
// ============================================================================

/// Short and long codes accepted for text encoding.
pub const TEXT_ENCODING_CODES: [&str; 2] = ["s", "string"];

/// Short and long codes accepted for binary encoding.
pub const BINARY_ENCODING_CODES: [&str; 2] = ["b", "binary"];

/// Encoding applied when a mapping entry carries no `#` suffix.
pub const DEFAULT_COLUMN_ENCODING: ColumnEncoding = ColumnEncoding::Text;

// ============================================================================
// ROW IDENTIFIERS
// ============================================================================

/// Default component separator for composite row identifiers.
pub const DEFAULT_ROW_ID_SEPARATOR: u8 = b'_';

// ============================================================================
// INLINE CAPACITIES
// Stack capacities for SmallVec buffers on the materialization path
// ============================================================================

/// Fields held inline by `LazyRow::fields` before spilling to the heap.
pub const INLINE_ROW_FIELDS: usize = 16;

/// Composite row-identifier components split inline before spilling.
pub const INLINE_ROW_ID_PARTS: usize = 8;

const _: () = assert!(
    INLINE_ROW_FIELDS >= INLINE_ROW_ID_PARTS,
    "INLINE_ROW_FIELDS must be >= INLINE_ROW_ID_PARTS"
);
