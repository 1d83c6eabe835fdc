#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure resolution system mapping tile bounds to grid indices.
//!
//! Resolution is a closed-form O(1) computation over the grid's dimension,
//! never a search through its contents. This is what lets a
//! camera cull by index without scanning the world.

use tile_matrix_core::{GridIndex, TileBounds};

/// Removes the index gap left by the tile-less origin on one axis.
///
/// All four quadrants meet at the origin but none contains it, so a positive
/// tile bound sits one index closer to the grid center than a direct
/// conversion suggests. Non-positive bounds pass through unchanged.
#[must_use]
pub const fn offset_for_missing_origin(bound: i32, index: i32) -> i32 {
    if bound > 0 {
        index - 1
    } else {
        index
    }
}

/// Resolves tile bounds to the row-major index of the owning cell.
///
/// The row derives from the y bound and the column from the x bound,
/// matching row-major storage where rows vary along y. Callers must only
/// pass bounds produced by a successful classification of an in-world
/// coordinate together with the dimension of the grid that classification
/// targeted; anything else is a caller error with an unspecified result.
#[must_use]
pub fn resolve(dimension: u32, bounds: TileBounds) -> GridIndex {
    debug_assert!(
        dimension > 0 && dimension % 2 == 0,
        "resolve requires an even, non-zero grid dimension"
    );
    debug_assert!(
        !bounds.touches_axis(),
        "resolve requires bounds from an in-world classification"
    );

    let half = (dimension / 2) as i32;
    let row = offset_for_missing_origin(bounds.y(), bounds.y() + half);
    let column = offset_for_missing_origin(bounds.x(), bounds.x() + half);

    debug_assert!(
        row >= 0 && column >= 0,
        "resolve requires bounds within the grid's span"
    );
    GridIndex::new(row as u32, column as u32)
}
