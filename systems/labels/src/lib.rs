#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Spreadsheet-style cell label generator.
//!
//! Produces "A1 reference style" labels for a rectangular sheet: columns are
//! numbered in bijective base-26 (A..Z, AA..AZ, BA..) and rows from 1. This
//! generator is deliberately unrelated to the tile grid: it shares no types
//! or logic with the coordinate system and addresses cells by name rather
//! than by index.

use std::collections::BTreeMap;

use thiserror::Error;

const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Reasons a label sheet cannot be generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LabelError {
    /// A sheet needs at least one column and one row.
    #[error("label sheet dimensions must both be at least one")]
    ZeroDimension,
}

/// Converts a one-based column number into its bijective base-26 label.
///
/// 1 maps to "A", 26 to "Z", 27 to "AA", 703 to "AAA". There is no zero
/// digit: every 26 columns the width of the label grows by one letter.
#[must_use]
pub fn column_label(column: u32) -> String {
    debug_assert!(column >= 1, "column numbering is one-based");
    let mut letters = Vec::new();
    let mut remaining = column;
    while remaining > 0 {
        remaining -= 1;
        letters.push(ALPHABET[(remaining % 26) as usize]);
        remaining /= 26;
    }
    letters.iter().rev().collect()
}

/// Generates the full set of empty-valued cells for a sheet.
///
/// Keys are labels like "A1" or "AB12"; values start empty for the caller to
/// fill in. The map covers every combination of the `width` columns and
/// `height` rows.
pub fn generate_labels(width: u32, height: u32) -> Result<BTreeMap<String, String>, LabelError> {
    if width == 0 || height == 0 {
        return Err(LabelError::ZeroDimension);
    }

    let mut cells = BTreeMap::new();
    for column in 1..=width {
        let label = column_label(column);
        for row in 1..=height {
            let _ = cells.insert(format!("{label}{row}"), String::new());
        }
    }
    Ok(cells)
}
