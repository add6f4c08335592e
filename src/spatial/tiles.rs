//! Candidate square tiles
//!
//! A tile is stored corner-to-corner rather than as corner-plus-side so the
//! output formatter can quantize all four coordinates independently, the
//! shape the `[x, y, x2, y2]` rectangle export uses.

use crate::io::error::Result;
use crate::math::rounding::round_to_decimals;
use crate::spatial::point::Point;
use crate::spatial::ring::Ring;
use std::fmt;

/// An axis-aligned square positioned on the candidate grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Left edge
    pub min_x: f64,
    /// Bottom edge
    pub min_y: f64,
    /// Right edge
    pub max_x: f64,
    /// Top edge
    pub max_y: f64,
}

impl Tile {
    /// Position a candidate by its lower-left corner and side length
    pub const fn at(x: f64, y: f64, stride: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + stride,
            max_y: y + stride,
        }
    }

    /// Horizontal extent
    pub const fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub const fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point
    pub const fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// The tile's boundary as a counter-clockwise ring
    ///
    /// # Errors
    ///
    /// Returns an error for a degenerate tile (non-positive extent), which
    /// cannot arise from a positive-stride scan.
    pub fn to_ring(&self) -> Result<Ring> {
        Ring::rectangle(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Corner coordinates in `[min_x, min_y, max_x, max_y]` order
    pub const fn as_rect(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Quantize all four coordinates to a decimal precision
    #[must_use]
    pub fn rounded_to(&self, decimals: u32) -> Self {
        Self {
            min_x: round_to_decimals(self.min_x, decimals),
            min_y: round_to_decimals(self.min_y, decimals),
            max_x: round_to_decimals(self.max_x, decimals),
            max_y: round_to_decimals(self.max_y, decimals),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
