#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Tile Matrix engine.
//!
//! This crate defines the value types that connect the grid world, the pure
//! classification and resolution systems, and the adapters. A continuous
//! [`WorldCoord`] measured in meters is classified into a [`TileBounds`],
//! which is then resolved into a [`GridIndex`] addressing the backing grid.
//! The [`GridConfig`] constructed at session start is the single source of
//! truth for the session's span and scale; no ambient globals exist.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quadrant-relative coordinate identifying a single tile.
///
/// All four quadrants of the tile plane meet at the theoretical origin, but
/// no tile contains it: every tile stored in a built grid has non-zero
/// components on both axes. The type itself can still represent a zero
/// component because classifying the exact origin yields `(0, 0)`; consumers
/// detect that case through [`TileBounds::touches_axis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileBounds {
    x: i32,
    y: i32,
}

impl TileBounds {
    /// Creates a new tile bounds value from signed axis components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Signed tile coordinate along the x axis.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Signed tile coordinate along the y axis.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Reports whether either component sits on an axis.
    ///
    /// No built grid contains such a value; callers that receive one from
    /// classification must treat it as "no tile" rather than index with it.
    #[must_use]
    pub const fn touches_axis(&self) -> bool {
        self.x == 0 || self.y == 0
    }
}

/// Zero-based row-major address of a cell in the backing grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridIndex {
    row: u32,
    column: u32,
}

impl GridIndex {
    /// Creates a new grid index from row and column components.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index; rows vary along the y axis.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index; columns vary along the x axis.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// Continuous world-space point measured in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldCoord {
    x: f32,
    y: f32,
}

impl WorldCoord {
    /// Creates a new world coordinate.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal position in meters.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position in meters.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

/// Axis-aligned boundary rectangle of the playable world, in meters.
///
/// Containment is half-open: the left and top edges belong to the world, the
/// right and bottom edges do not. A coordinate exactly on the right or bottom
/// edge therefore classifies as outside the world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldRect {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl WorldRect {
    /// Creates a new world rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Left edge of the rectangle in meters.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.left
    }

    /// Top edge of the rectangle in meters.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.top
    }

    /// Width of the rectangle in meters.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the rectangle in meters.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Right edge of the rectangle; exclusive under containment.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge of the rectangle; exclusive under containment.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Top-left corner of the rectangle.
    #[must_use]
    pub const fn top_left(&self) -> WorldCoord {
        WorldCoord::new(self.left, self.top)
    }

    /// Top-right corner of the rectangle.
    #[must_use]
    pub fn top_right(&self) -> WorldCoord {
        WorldCoord::new(self.right(), self.top)
    }

    /// Bottom-left corner of the rectangle.
    #[must_use]
    pub fn bottom_left(&self) -> WorldCoord {
        WorldCoord::new(self.left, self.bottom())
    }

    /// Bottom-right corner of the rectangle.
    #[must_use]
    pub fn bottom_right(&self) -> WorldCoord {
        WorldCoord::new(self.right(), self.bottom())
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> WorldCoord {
        WorldCoord::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Half-open point containment test.
    ///
    /// Left/top edges are inclusive, right/bottom edges exclusive.
    #[must_use]
    pub fn contains(&self, point: WorldCoord) -> bool {
        point.x() >= self.left
            && point.x() < self.right()
            && point.y() >= self.top
            && point.y() < self.bottom()
    }
}

/// Number of tiles per quadrant along one axis.
///
/// The backing grid has `2 * span` rows and columns, the extra factor of two
/// covering the negative and positive quadrants with no origin cell between
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span(u32);

impl Span {
    /// Creates a new span, rejecting the degenerate zero-tile case.
    pub const fn new(value: u32) -> Result<Self, ConfigError> {
        if value == 0 {
            return Err(ConfigError::ZeroSpan);
        }
        Ok(Self(value))
    }

    /// Retrieves the number of tiles per quadrant.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Edge length of the backing grid in cells.
    #[must_use]
    pub const fn dimension(&self) -> u32 {
        self.0 * 2
    }
}

/// Immutable session configuration for the tile matrix.
///
/// Constructed once at session start and passed by reference into the grid
/// builder and the classification system. The scale factor is purely
/// cosmetic to the index mapping: it fixes the real-world size of a tile but
/// never changes which cell a relative coordinate lands in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    span: Span,
    meters_per_tile: f32,
}

impl GridConfig {
    /// Creates a validated configuration from a span and tile scale.
    pub fn new(span: Span, meters_per_tile: f32) -> Result<Self, ConfigError> {
        if !meters_per_tile.is_finite() || meters_per_tile <= 0.0 {
            return Err(ConfigError::NonPositiveScale {
                value: meters_per_tile,
            });
        }
        Ok(Self {
            span,
            meters_per_tile,
        })
    }

    /// Tiles per quadrant along one axis.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Real-world edge length of a single tile in meters.
    #[must_use]
    pub const fn meters_per_tile(&self) -> f32 {
        self.meters_per_tile
    }

    /// Half of the world's edge length in meters.
    #[must_use]
    pub fn half_span_in_meters(&self) -> f32 {
        self.span.get() as f32 * self.meters_per_tile
    }

    /// Boundary rectangle of the playable world, centered on the origin.
    #[must_use]
    pub fn world_rect(&self) -> WorldRect {
        let half = self.half_span_in_meters();
        WorldRect::new(-half, -half, half * 2.0, half * 2.0)
    }
}

/// Reasons a tile matrix configuration is rejected at construction.
///
/// These are configuration bugs, not runtime conditions: construction fails
/// instead of producing a malformed grid.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A span of zero tiles per quadrant would build an empty grid.
    #[error("span must be at least one tile per quadrant")]
    ZeroSpan,
    /// The tile scale must be a positive, finite number of meters.
    #[error("meters per tile must be positive and finite, got {value}")]
    NonPositiveScale {
        /// Scale value supplied by the caller.
        value: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GridConfig, GridIndex, Span, TileBounds, WorldCoord, WorldRect};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn tile_bounds_round_trips_through_bincode() {
        assert_round_trip(&TileBounds::new(-3, 2));
    }

    #[test]
    fn grid_index_round_trips_through_bincode() {
        assert_round_trip(&GridIndex::new(2, 4));
    }

    #[test]
    fn world_rect_round_trips_through_bincode() {
        assert_round_trip(&WorldRect::new(-15.0, -15.0, 30.0, 30.0));
    }

    #[test]
    fn tile_bounds_reports_axis_contact() {
        assert!(TileBounds::new(0, 0).touches_axis());
        assert!(TileBounds::new(0, 2).touches_axis());
        assert!(TileBounds::new(-1, 0).touches_axis());
        assert!(!TileBounds::new(-1, 3).touches_axis());
    }

    #[test]
    fn world_rect_contains_is_half_open() {
        let rect = WorldRect::new(-15.0, -15.0, 30.0, 30.0);
        assert!(rect.contains(WorldCoord::new(-15.0, -15.0)));
        assert!(rect.contains(WorldCoord::new(0.0, 0.0)));
        assert!(rect.contains(WorldCoord::new(14.999, 14.999)));
        assert!(!rect.contains(WorldCoord::new(15.0, 15.0)));
        assert!(!rect.contains(WorldCoord::new(15.0, 0.0)));
        assert!(!rect.contains(WorldCoord::new(0.0, 15.0)));
    }

    #[test]
    fn world_rect_exposes_corners_and_center() {
        let rect = WorldRect::new(-15.0, -15.0, 30.0, 30.0);
        assert_eq!(rect.top_left(), WorldCoord::new(-15.0, -15.0));
        assert_eq!(rect.bottom_right(), WorldCoord::new(15.0, 15.0));
        assert_eq!(rect.center(), WorldCoord::new(0.0, 0.0));
    }

    #[test]
    fn span_rejects_zero() {
        assert_eq!(Span::new(0), Err(ConfigError::ZeroSpan));
    }

    #[test]
    fn span_dimension_doubles_the_quadrant_count() {
        let span = Span::new(3).expect("span");
        assert_eq!(span.get(), 3);
        assert_eq!(span.dimension(), 6);
    }

    #[test]
    fn grid_config_rejects_non_positive_scale() {
        let span = Span::new(3).expect("span");
        assert_eq!(
            GridConfig::new(span, 0.0),
            Err(ConfigError::NonPositiveScale { value: 0.0 })
        );
        assert_eq!(
            GridConfig::new(span, -2.5),
            Err(ConfigError::NonPositiveScale { value: -2.5 })
        );
        assert!(GridConfig::new(span, f32::NAN).is_err());
    }

    #[test]
    fn grid_config_derives_origin_centered_world_rect() {
        let span = Span::new(3).expect("span");
        let config = GridConfig::new(span, 5.0).expect("config");
        let rect = config.world_rect();
        assert_eq!(rect, WorldRect::new(-15.0, -15.0, 30.0, 30.0));
        assert_eq!(config.half_span_in_meters(), 15.0);
    }
}
