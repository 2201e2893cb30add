//! Fuzz testing for the column mapping parser.
//!
//! Arbitrary mapping strings must either parse or fail with an error, never
//! panic. Anything that parses must re-parse from its canonical form to the
//! same table.

#![no_main]

use libfuzzer_sys::fuzz_target;

use widerow::{ColumnEncoding, ColumnMappings};

fuzz_target!(|spec: &str| {
    let Ok(table) = ColumnMappings::parse(spec, ColumnEncoding::Text) else {
        return;
    };

    let canonical: Vec<String> = table.iter().map(|m| m.spec()).collect();
    let reparsed = ColumnMappings::parse(&canonical.join(","), ColumnEncoding::Text)
        .expect("canonical mapping text must parse");
    assert_eq!(table, reparsed);
});
