use tile_matrix_core::{GridIndex, Span, TileBounds};
use tile_matrix_system_resolve::resolve;
use tile_matrix_world::Grid;

#[test]
fn every_stored_tile_resolves_back_to_its_own_cell() {
    for span in [1, 3, 5] {
        let span = Span::new(span).expect("span");
        let grid = Grid::build(span);
        let dimension = grid.dimension();

        for row in 0..dimension {
            for column in 0..dimension {
                let index = GridIndex::new(row, column);
                let tile = grid.at(index).expect("built cell");
                assert_eq!(
                    resolve(dimension, tile),
                    index,
                    "tile ({}, {}) should resolve to row {row} column {column}",
                    tile.x(),
                    tile.y(),
                );
            }
        }
    }
}

#[test]
fn resolved_indices_always_land_inside_the_grid() {
    let span = Span::new(4).expect("span");
    let grid = Grid::build(span);
    let radius = span.get() as i32;

    for y in -radius..=radius {
        for x in -radius..=radius {
            if x == 0 || y == 0 {
                continue;
            }
            let index = resolve(grid.dimension(), TileBounds::new(x, y));
            assert!(grid.at(index).is_some());
        }
    }
}
