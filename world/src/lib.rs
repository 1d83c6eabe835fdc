#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative grid state for the Tile Matrix engine.
//!
//! The grid is built once from a validated [`Span`] and is immutable for the
//! rest of the session, so shared references to it may be read concurrently
//! without synchronization.

use tile_matrix_core::{GridIndex, Span, TileBounds};

/// Immutable logical grid of tile bounds covering all four quadrants.
///
/// Cells are stored row-major in ascending y order, each row in ascending x
/// order, with both axes skipping zero. The theoretical origin sits between
/// the two center rows and columns; no cell contains it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<TileBounds>,
    dimension: u32,
}

impl Grid {
    /// Builds the grid for the provided quadrant span.
    ///
    /// The result has exactly `2 * span` rows and columns. Infallible: the
    /// `span >= 1` precondition is enforced by [`Span`] at construction.
    #[must_use]
    pub fn build(span: Span) -> Self {
        let dimension = span.dimension();
        let radius = span.get() as i32;
        let mut cells = Vec::with_capacity((dimension as usize).pow(2));
        for y in -radius..=radius {
            if y == 0 {
                continue;
            }
            for x in -radius..=radius {
                if x == 0 {
                    continue;
                }
                cells.push(TileBounds::new(x, y));
            }
        }
        Self { cells, dimension }
    }

    /// Edge length of the grid in cells.
    #[must_use]
    pub const fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Total number of cells stored in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether the grid holds no cells. Never true for a built grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounds-checked lookup of the tile stored at the provided index.
    ///
    /// Returns `None` when either component falls outside the grid, so
    /// callers branch on presence explicitly instead of inferring validity
    /// from index values.
    #[must_use]
    pub fn at(&self, index: GridIndex) -> Option<TileBounds> {
        self.flat_index(index)
            .and_then(|flat| self.cells.get(flat).copied())
    }

    /// Iterator over the grid's rows in ascending y order.
    pub fn rows(&self) -> impl Iterator<Item = &[TileBounds]> {
        self.cells.chunks(self.dimension as usize)
    }

    fn flat_index(&self, index: GridIndex) -> Option<usize> {
        if index.row() < self.dimension && index.column() < self.dimension {
            let row = usize::try_from(index.row()).ok()?;
            let column = usize::try_from(index.column()).ok()?;
            let width = usize::try_from(self.dimension).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Read-only queries over the built grid, mirroring its public surface for
/// callers that prefer free functions at system boundaries.
pub mod query {
    use super::Grid;
    use tile_matrix_core::{GridIndex, TileBounds};

    /// Edge length of the grid in cells.
    #[must_use]
    pub fn dimension(grid: &Grid) -> u32 {
        grid.dimension()
    }

    /// Bounds-checked tile lookup.
    #[must_use]
    pub fn tile_at(grid: &Grid, index: GridIndex) -> Option<TileBounds> {
        grid.at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use tile_matrix_core::{GridIndex, Span, TileBounds};

    fn grid_with_span(span: u32) -> Grid {
        Grid::build(Span::new(span).expect("span"))
    }

    #[test]
    fn build_produces_two_span_rows_and_columns() {
        for span in [1, 3, 5] {
            let grid = grid_with_span(span);
            assert_eq!(grid.dimension(), span * 2);
            assert_eq!(grid.len(), (span as usize * 2).pow(2));
            assert!(grid.rows().all(|row| row.len() == (span * 2) as usize));
        }
    }

    #[test]
    fn no_cell_contains_the_origin() {
        let grid = grid_with_span(4);
        assert!(grid
            .rows()
            .flatten()
            .all(|tile| tile.x() != 0 && tile.y() != 0));
    }

    #[test]
    fn cells_ascend_row_major_with_skipped_axes() {
        let grid = grid_with_span(3);
        assert_eq!(grid.at(GridIndex::new(0, 0)), Some(TileBounds::new(-3, -3)));
        assert_eq!(grid.at(GridIndex::new(0, 2)), Some(TileBounds::new(-1, -3)));
        // Skipping zero makes the cell after (-1, -3) jump straight to (1, -3).
        assert_eq!(grid.at(GridIndex::new(0, 3)), Some(TileBounds::new(1, -3)));
        assert_eq!(grid.at(GridIndex::new(3, 3)), Some(TileBounds::new(1, 1)));
        assert_eq!(grid.at(GridIndex::new(5, 5)), Some(TileBounds::new(3, 3)));
    }

    #[test]
    fn at_rejects_out_of_range_indices() {
        let grid = grid_with_span(3);
        assert_eq!(grid.at(GridIndex::new(6, 0)), None);
        assert_eq!(grid.at(GridIndex::new(0, 6)), None);
        assert_eq!(grid.at(GridIndex::new(u32::MAX, u32::MAX)), None);
    }
}
