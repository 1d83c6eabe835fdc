//! Plain-text renderers for the interactive session.
//!
//! Everything here is a pure `String` producer; the session loop decides
//! what reaches stdout.

use tile_matrix_core::{WorldCoord, WorldRect};
use tile_matrix_world::Grid;

fn signed_int(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

fn signed_float(value: f32) -> String {
    if value > 0.0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Formats an integer pair with explicit plus signs, keeping quadrant
/// listings visually symmetrical.
pub(crate) fn signed_pair(x: i32, y: i32) -> String {
    format!("({},{})", signed_int(x), signed_int(y))
}

/// Formats a world coordinate with explicit plus signs.
pub(crate) fn signed_coord(coordinate: WorldCoord) -> String {
    format!(
        "({},{})",
        signed_float(coordinate.x()),
        signed_float(coordinate.y())
    )
}

/// Renders the full grid, one row per line in ascending y order.
///
/// A vertical bar follows each `x == -1` cell and a horizontal rule marked
/// `(0,0)` separates the negative-y rows from the positive-y rows, making
/// the tile-less origin visible at the quadrant seam.
pub(crate) fn render_grid(grid: &Grid) -> String {
    let span = (grid.dimension() / 2) as usize;
    let mut out = String::new();
    let mut line_width = 0;
    for (row_index, row) in grid.rows().enumerate() {
        let mut line = String::new();
        for tile in row {
            line.push_str(&signed_pair(tile.x(), tile.y()));
            line.push(' ');
            if tile.x() == -1 {
                line.push_str("| ");
            }
        }
        let line = line.trim_end();
        line_width = line_width.max(line.len());
        out.push_str(line);
        out.push('\n');
        if row_index + 1 == span {
            let marker = "(0,0)";
            let rule = "-".repeat(line_width.saturating_sub(marker.len()) / 2);
            out.push_str(&rule);
            out.push_str(marker);
            out.push_str(&rule);
            out.push('\n');
        }
    }
    out
}

/// Renders the world boundary as a corner diagram centered on the origin.
pub(crate) fn render_rect(rect: &WorldRect) -> String {
    let spine = "     |\n     |\n";
    let rule = "-".repeat(8);
    format!(
        "{} | {}\n{spine}{rule}{}{rule}\n{spine}{} | {}\n",
        signed_coord(rect.top_left()),
        signed_coord(rect.top_right()),
        signed_coord(rect.center()),
        signed_coord(rect.bottom_left()),
        signed_coord(rect.bottom_right()),
    )
}

#[cfg(test)]
mod tests {
    use super::{render_grid, render_rect, signed_coord, signed_pair};
    use tile_matrix_core::{Span, WorldCoord, WorldRect};
    use tile_matrix_world::Grid;

    #[test]
    fn pairs_gain_plus_signs_on_positive_components() {
        assert_eq!(signed_pair(1, -2), "(+1,-2)");
        assert_eq!(signed_pair(-3, 3), "(-3,+3)");
        assert_eq!(signed_pair(0, 0), "(0,0)");
    }

    #[test]
    fn coordinates_format_like_pairs() {
        assert_eq!(signed_coord(WorldCoord::new(7.5, -3.0)), "(+7.5,-3)");
        assert_eq!(signed_coord(WorldCoord::new(0.0, 15.0)), "(0,+15)");
    }

    #[test]
    fn grid_rendering_marks_the_quadrant_seams() {
        let grid = Grid::build(Span::new(1).expect("span"));
        let rendered = render_grid(&grid);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "(-1,-1) | (+1,-1)",
                "------(0,0)------",
                "(-1,+1) | (+1,+1)",
            ]
        );
    }

    #[test]
    fn rect_rendering_shows_all_corners_and_the_center() {
        let rendered = render_rect(&WorldRect::new(-15.0, -15.0, 30.0, 30.0));
        assert!(rendered.starts_with("(-15,-15) | (+15,-15)\n"));
        assert!(rendered.contains("--------(0,0)--------"));
        assert!(rendered.ends_with("(-15,+15) | (+15,+15)\n"));
    }
}
