#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure classification system mapping world coordinates to tile bounds.
//!
//! Classification is arithmetic inference, not a search: each axis is scaled
//! by the tile size and snapped to the containing integer, and world
//! membership is decided by a separate half-open rectangle test on the raw
//! coordinate. Both results are reported together so callers never infer
//! validity from the bounds value itself.

use tile_matrix_core::{TileBounds, WorldCoord, WorldRect};

/// Outcome of classifying a world coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    within_world: bool,
    bounds: TileBounds,
}

impl Classification {
    /// Creates a classification from explicit membership and bounds.
    #[must_use]
    pub const fn new(within_world: bool, bounds: TileBounds) -> Self {
        Self {
            within_world,
            bounds,
        }
    }

    /// Reports whether the raw coordinate fell inside the world boundary.
    #[must_use]
    pub const fn within_world(&self) -> bool {
        self.within_world
    }

    /// Tile bounds containing the coordinate.
    ///
    /// Meaningful only when [`Classification::within_world`] is true; an
    /// out-of-world bounds must not be resolved into a grid index.
    #[must_use]
    pub const fn bounds(&self) -> TileBounds {
        self.bounds
    }
}

/// Snaps a scaled axis value to the integer tile bound containing it.
///
/// Positive values round away from zero with `ceil`, negative values with
/// `floor`, and exactly zero stays at the origin. The asymmetry is what
/// makes a coordinate on a tile's boundary belong to the tile further from
/// the origin on both sides, so no tile ever owns the zero bound.
#[must_use]
pub fn containing_integer(value: f32) -> i32 {
    if value > 0.0 {
        value.ceil() as i32
    } else if value < 0.0 {
        value.floor() as i32
    } else {
        0
    }
}

/// Classifies a world coordinate against the boundary and tile scale.
///
/// The tile bounds are always computed, even for coordinates outside the
/// world, so diagnostic callers can display where a rejected coordinate
/// would have landed. `meters_per_tile` must be positive; the session
/// configuration guarantees this before any classification happens.
#[must_use]
pub fn classify(
    world_rect: &WorldRect,
    meters_per_tile: f32,
    coordinate: WorldCoord,
) -> Classification {
    debug_assert!(
        meters_per_tile > 0.0,
        "classify requires a positive tile scale"
    );
    let bounds = TileBounds::new(
        containing_integer(coordinate.x() / meters_per_tile),
        containing_integer(coordinate.y() / meters_per_tile),
    );
    Classification::new(world_rect.contains(coordinate), bounds)
}
